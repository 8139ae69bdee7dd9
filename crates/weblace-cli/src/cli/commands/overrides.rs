//! `weblace overrides` – list operator override files.

use anyhow::Result;
use std::fs;
use std::path::Path;
use weblace_core::config::{self, WeblaceConfig};

pub fn run_overrides(cfg: &WeblaceConfig) -> Result<()> {
    let root = config::customization_root(cfg)?;
    let mut found = 0usize;
    if root.is_dir() {
        visit(&root, &root, &mut found)?;
    }
    if found == 0 {
        println!("No overrides under {}", root.display());
    }
    Ok(())
}

fn visit(root: &Path, dir: &Path, found: &mut usize) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            visit(root, &path, found)?;
        } else {
            let rel = path.strip_prefix(root).unwrap_or(&path);
            println!("{}", rel.display());
            *found += 1;
        }
    }
    Ok(())
}
