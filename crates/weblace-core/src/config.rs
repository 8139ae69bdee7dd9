use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Customization section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomizationConfig {
    /// Root directory holding operator overrides. Defaults to
    /// `~/.local/share/weblace/customized` when unset.
    #[serde(default)]
    pub root: Option<PathBuf>,
    /// Per-resource switches, keyed `"<plugin>/<file>"`, e.g.
    /// `"plan/network.html" = true`. Missing keys mean "not customizable".
    #[serde(default)]
    pub files: BTreeMap<String, bool>,
}

/// Global configuration loaded from `~/.config/weblace/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeblaceConfig {
    #[serde(default)]
    pub customization: CustomizationConfig,
}

impl WeblaceConfig {
    /// Whether an override on disk may shadow the bundled copy of
    /// `file_name` belonging to `plugin_name`.
    pub fn is_customizable(&self, plugin_name: &str, file_name: &str) -> bool {
        let key = format!("{plugin_name}/{file_name}");
        self.customization.files.get(&key).copied().unwrap_or(false)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("weblace")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Directory that holds operator overrides, honoring the configured root.
pub fn customization_root(cfg: &WeblaceConfig) -> Result<PathBuf> {
    if let Some(root) = &cfg.customization.root {
        return Ok(root.clone());
    }
    let xdg_dirs = xdg::BaseDirectories::with_prefix("weblace")?;
    Ok(xdg_dirs.get_data_home().join("customized"))
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WeblaceConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WeblaceConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: WeblaceConfig = toml::from_str(&data)?;
    Ok(cfg)
}
