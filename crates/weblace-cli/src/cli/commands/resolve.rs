//! `weblace resolve` – run a bundled asset through the full pipeline.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use weblace_core::config::{self, WeblaceConfig};
use weblace_core::policy::ConfigFilePolicy;
use weblace_core::resolver::ResourceResolver;
use weblace_core::resource::WebResource;
use weblace_core::snippet::{Position, SnippetRegistry};

pub fn run_resolve(
    cfg: &WeblaceConfig,
    plugin: &str,
    file_name: &str,
    source: &Path,
    scripts: &[String],
    styles: &[String],
    at: Position,
    out: Option<&Path>,
) -> Result<()> {
    let registry = Arc::new(SnippetRegistry::new());
    if !scripts.is_empty() {
        let srcs: Vec<&str> = scripts.iter().map(String::as_str).collect();
        registry.add_scripts(plugin, file_name, at, &srcs)?;
    }
    if !styles.is_empty() {
        let srcs: Vec<&str> = styles.iter().map(String::as_str).collect();
        registry.add_styles(plugin, file_name, at, &srcs)?;
    }

    let resolver = ResourceResolver::new(
        Box::new(ConfigFilePolicy::new(config::config_path()?)),
        config::customization_root(cfg)?,
        registry,
    );

    let bytes = fs::read(source)
        .with_context(|| format!("failed to read source asset {}", source.display()))?;
    let resource = resolver.resolve(plugin, file_name, || WebResource::from_bytes(bytes))?;

    match out {
        Some(path) => fs::write(path, resource.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout().write_all(resource.as_bytes())?,
    }
    Ok(())
}
