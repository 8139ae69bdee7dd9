//! Registry of HTML fragments spliced into served pages.
//!
//! Feature modules register `<script>`/`<link>` fragments against a
//! (plugin, file) pair at startup; every page render applies the matching
//! fragments at fixed anchor points. The registry only grows for the life of
//! the process.

mod build;
mod inject;

use crate::resource::WebResource;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

/// Insertion point inside an HTML document. Closed set; the injector
/// dispatches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    /// Immediately before `</head>`.
    Head,
    /// After the opening `<body>` tag, or at the end-of-page-wrapper marker
    /// when the layout provides one.
    Body,
    /// Immediately before `</body>`.
    BodyEnd,
}

/// A registered fragment. Two snippets with identical fields are the same
/// snippet and deduplicate in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Snippet {
    plugin_name: String,
    file_name: String,
    position: Position,
    content: String,
}

impl Snippet {
    fn matches(&self, plugin_name: &str, file_name: &str) -> bool {
        self.plugin_name == plugin_name && self.file_name == file_name
    }
}

/// Rejected registration input. Raised at registration time, never deferred
/// to render time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    /// Only markup files have anchors to splice into.
    #[error("'{file_name}' is not a .html file, snippets can only target html files")]
    NotHtml { file_name: String },
}

/// Shared, append-only snippet store. Thread-safe; insertion order is
/// preserved so fragments apply in registration order, duplicates are
/// dropped. Pass an `Arc` of this into the resolver instead of relying on
/// any process-wide instance.
#[derive(Debug, Default)]
pub struct SnippetRegistry {
    snippets: RwLock<Vec<Snippet>>,
}

impl SnippetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one `<script>` tag per source at `position` of the target
    /// page. Fragments from one call stay contiguous in the output.
    pub fn add_scripts(
        &self,
        plugin_name: &str,
        file_name: &str,
        position: Position,
        srcs: &[&str],
    ) -> Result<(), RegisterError> {
        build::require_html(file_name)?;
        if srcs.is_empty() {
            return Ok(());
        }
        self.insert(Snippet {
            plugin_name: plugin_name.to_string(),
            file_name: file_name.to_string(),
            position,
            content: build::script_tags(srcs),
        });
        Ok(())
    }

    /// Register one stylesheet `<link>` tag per source at `position` of the
    /// target page.
    pub fn add_styles(
        &self,
        plugin_name: &str,
        file_name: &str,
        position: Position,
        srcs: &[&str],
    ) -> Result<(), RegisterError> {
        build::require_html(file_name)?;
        if srcs.is_empty() {
            return Ok(());
        }
        self.insert(Snippet {
            plugin_name: plugin_name.to_string(),
            file_name: file_name.to_string(),
            position,
            content: build::link_tags(srcs),
        });
        Ok(())
    }

    /// Splice all fragments registered for (plugin, file) into `resource`.
    ///
    /// No matching fragments is a strict no-op returning the input. A
    /// resource without a textual view yields a diagnostic page instead of an
    /// error, so something always renders.
    pub fn apply(&self, plugin_name: &str, file_name: &str, resource: WebResource) -> WebResource {
        let by_position = self.fragments_for(plugin_name, file_name);
        if by_position.is_empty() {
            return resource;
        }
        match resource.as_text() {
            Some(html) => WebResource::from_string(inject::splice(html, &by_position)),
            None => WebResource::from_string(inject::MISSING_TEXT_DIAGNOSTIC),
        }
    }

    /// Number of registered snippets.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn fragments_for(&self, plugin_name: &str, file_name: &str) -> BTreeMap<Position, String> {
        let snippets = self.read();
        let mut by_position = BTreeMap::new();
        for snippet in snippets.iter().filter(|s| s.matches(plugin_name, file_name)) {
            by_position
                .entry(snippet.position)
                .or_insert_with(String::new)
                .push_str(&snippet.content);
        }
        by_position
    }

    fn insert(&self, snippet: Snippet) {
        let mut snippets = self.write();
        if !snippets.contains(&snippet) {
            snippets.push(snippet);
        }
    }

    // A poisoned lock only means another registration panicked mid-push;
    // the Vec itself is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Snippet>> {
        self.snippets.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Snippet>> {
        self.snippets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
