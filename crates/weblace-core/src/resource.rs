//! Immutable in-memory representation of a servable web asset.

use std::fs;
use std::io;
use std::path::Path;

/// A servable asset with a binary view and an optional textual view.
///
/// Never mutated after creation. The textual view exists only when the bytes
/// are valid UTF-8; binary assets (images, fonts) simply have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebResource {
    bytes: Vec<u8>,
}

impl WebResource {
    /// Resource generated in memory (templated pages, diagnostics).
    pub fn from_string(text: impl Into<String>) -> Self {
        Self {
            bytes: text.into().into_bytes(),
        }
    }

    /// Resource built from a bundled asset's raw bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Resource read back from disk (operator overrides).
    pub fn from_file(path: &Path) -> io::Result<Self> {
        Ok(Self {
            bytes: fs::read(path)?,
        })
    }

    /// Binary view; always available.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Textual view, or `None` if the bytes are not valid UTF-8.
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
