//! Anchor-based splicing of fragments into an HTML document.
//!
//! The anchors are a micro-protocol: generated templates must contain the
//! literal `</head>`, `<body>` and `</body>` substrings (and optionally the
//! page-wrapper marker) for injection to take effect. A missing anchor
//! silently disables that insertion point.

use super::Position;
use std::collections::BTreeMap;

/// Layout-specific override point for body insertion. When present, body
/// fragments replace the marker instead of following the `<body>` tag.
const PAGE_WRAPPER_END: &str = "<!-- End of Page Wrapper -->";

/// Served when a page resource has no textual view; pages must always
/// render something.
pub(super) const MISSING_TEXT_DIAGNOSTIC: &str =
    "Error: resource has no textual representation, cannot inject snippets into binary content";

/// Performs at most one substitution per anchor.
pub(super) fn splice(html: &str, by_position: &BTreeMap<Position, String>) -> String {
    let mut html = html.to_string();

    if let Some(to_head) = by_position.get(&Position::Head) {
        html = html.replacen("</head>", &format!("{to_head}</head>"), 1);
    }

    if let Some(to_body) = by_position.get(&Position::Body) {
        if html.contains(PAGE_WRAPPER_END) {
            html = html.replacen(PAGE_WRAPPER_END, to_body, 1);
        } else {
            html = html.replacen("<body>", &format!("<body>{to_body}"), 1);
        }
    }

    if let Some(to_body_end) = by_position.get(&Position::BodyEnd) {
        html = html.replacen("</body>", &format!("{to_body_end}</body>"), 1);
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(entries: &[(Position, &str)]) -> BTreeMap<Position, String> {
        entries
            .iter()
            .map(|(pos, content)| (*pos, content.to_string()))
            .collect()
    }

    #[test]
    fn head_fragment_before_closing_head() {
        let out = splice(
            "<html><head></head><body></body></html>",
            &fragments(&[(Position::Head, "<script src=\"x.js\"></script>")]),
        );
        assert_eq!(
            out,
            "<html><head><script src=\"x.js\"></script></head><body></body></html>"
        );
    }

    #[test]
    fn body_fragment_after_opening_body() {
        let out = splice(
            "<html><body>content</body></html>",
            &fragments(&[(Position::Body, "<nav></nav>")]),
        );
        assert_eq!(out, "<html><body><nav></nav>content</body></html>");
    }

    #[test]
    fn wrapper_marker_overrides_body_anchor() {
        let out = splice(
            "<html><body>top<!-- End of Page Wrapper -->rest</body></html>",
            &fragments(&[(Position::Body, "<footer></footer>")]),
        );
        assert_eq!(out, "<html><body>top<footer></footer>rest</body></html>");
    }

    #[test]
    fn body_end_fragment_before_closing_body() {
        let out = splice(
            "<html><body>content</body></html>",
            &fragments(&[(Position::BodyEnd, "<script src=\"late.js\"></script>")]),
        );
        assert_eq!(
            out,
            "<html><body>content<script src=\"late.js\"></script></body></html>"
        );
    }

    #[test]
    fn missing_anchor_drops_fragment() {
        let out = splice(
            "<div>no anchors here</div>",
            &fragments(&[
                (Position::Head, "head"),
                (Position::Body, "body"),
                (Position::BodyEnd, "end"),
            ]),
        );
        assert_eq!(out, "<div>no anchors here</div>");
    }

    #[test]
    fn only_first_anchor_occurrence_substituted() {
        let out = splice(
            "<body></body><body></body>",
            &fragments(&[(Position::Body, "x")]),
        );
        assert_eq!(out, "<body>x</body><body></body>");
    }
}
