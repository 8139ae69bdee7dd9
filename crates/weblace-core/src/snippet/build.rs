//! Fragment construction and registration-time validation.

use super::RegisterError;

pub(super) fn require_html(file_name: &str) -> Result<(), RegisterError> {
    if file_name.ends_with(".html") {
        Ok(())
    } else {
        Err(RegisterError::NotHtml {
            file_name: file_name.to_string(),
        })
    }
}

/// One `<script src="...">` tag per source, concatenated into a single
/// fragment so one registration call stays contiguous in the page.
pub(super) fn script_tags(srcs: &[&str]) -> String {
    let mut out = String::new();
    for src in srcs {
        out.push_str("<script src=\"");
        out.push_str(src);
        out.push_str("\"></script>");
    }
    out
}

/// One stylesheet `<link>` tag per source, concatenated.
pub(super) fn link_tags(srcs: &[&str]) -> String {
    let mut out = String::new();
    for src in srcs {
        out.push_str("<link href=\"");
        out.push_str(src);
        out.push_str("\" rel=\"stylesheet\">");
    }
    out
}
