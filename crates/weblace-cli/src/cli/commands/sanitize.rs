//! `weblace sanitize` – clean untrusted text for HTML embedding.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use weblace_core::html::sanitize;

pub fn run_sanitize(path: &Path, colors: bool) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut cleaned = sanitize::strip_active_markup(&text);
    if colors {
        cleaned = sanitize::color_codes_to_spans(&cleaned);
    }
    print!("{cleaned}");
    Ok(())
}
