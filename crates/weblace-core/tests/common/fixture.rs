//! Shared helpers: write a config.toml and build a config-backed resolver.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use weblace_core::config::WeblaceConfig;
use weblace_core::policy::ConfigFilePolicy;
use weblace_core::resolver::ResourceResolver;
use weblace_core::snippet::SnippetRegistry;

/// Writes a config.toml under `dir` with the given per-resource switches.
pub fn write_config(dir: &Path, files: &[(&str, bool)]) -> PathBuf {
    let mut cfg = WeblaceConfig::default();
    for (key, enabled) in files {
        cfg.customization.files.insert(key.to_string(), *enabled);
    }
    let path = dir.join("config.toml");
    fs::write(&path, toml::to_string_pretty(&cfg).unwrap()).unwrap();
    path
}

/// Resolver wired to a config-file policy and a customization dir under
/// `dir`, sharing the given registry.
pub fn resolver(dir: &Path, config_path: PathBuf, registry: Arc<SnippetRegistry>) -> ResourceResolver {
    ResourceResolver::new(
        Box::new(ConfigFilePolicy::new(config_path)),
        dir.join("customized"),
        registry,
    )
}
