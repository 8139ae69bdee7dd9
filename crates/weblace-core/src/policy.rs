//! Customization policy: which resources may be overridden on disk.
//!
//! The resolver only depends on the trait; production wires in the
//! config-file-backed implementation, tests use the in-memory one.

use crate::config::WeblaceConfig;
use std::collections::BTreeSet;
use std::io;
use std::path::PathBuf;

/// Answers whether a (plugin, file) pair should be served from the
/// customization directory. The lookup may fail with an I/O-flavored error
/// when the backing store is unreadable; callers degrade to the bundled copy.
pub trait CustomizationPolicy {
    fn is_customizable(&self, plugin_name: &str, file_name: &str) -> io::Result<bool>;
}

/// Policy backed by `config.toml` on disk, re-read on every lookup so
/// operator edits take effect without a restart. Lookups are rare (one per
/// page render) so the extra read is not a concern.
#[derive(Debug, Clone)]
pub struct ConfigFilePolicy {
    path: PathBuf,
}

impl ConfigFilePolicy {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CustomizationPolicy for ConfigFilePolicy {
    fn is_customizable(&self, plugin_name: &str, file_name: &str) -> io::Result<bool> {
        let data = std::fs::read_to_string(&self.path)?;
        let cfg: WeblaceConfig =
            toml::from_str(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(cfg.is_customizable(plugin_name, file_name))
    }
}

/// Fixed in-memory policy for tests and one-shot CLI invocations.
#[derive(Debug, Clone, Default)]
pub struct StaticPolicy {
    enabled: BTreeSet<(String, String)>,
}

impl StaticPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(mut self, plugin_name: &str, file_name: &str) -> Self {
        self.enabled
            .insert((plugin_name.to_string(), file_name.to_string()));
        self
    }
}

impl CustomizationPolicy for StaticPolicy {
    fn is_customizable(&self, plugin_name: &str, file_name: &str) -> io::Result<bool> {
        Ok(self
            .enabled
            .contains(&(plugin_name.to_string(), file_name.to_string())))
    }
}
