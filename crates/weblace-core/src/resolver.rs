//! Resolves resource requests to bundled assets or operator overrides.
//!
//! An existing override file always wins over the bundled copy until it is
//! manually deleted; the resolver never refreshes it. On the first resolve of
//! a customizable resource with no override yet, the bundled bytes are
//! persisted so operators can hand-edit them afterwards.

use crate::policy::CustomizationPolicy;
use crate::resource::WebResource;
use crate::snippet::SnippetRegistry;
use crate::web_path;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// A corrupt or unreadable override must be surfaced to the operator,
    /// not papered over with the bundled copy.
    #[error("failed to read override {}: {source}", path.display())]
    ReadOverride {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The requested name would escape the customization directory.
    #[error("'{0}' is not a safe relative resource path")]
    UnsafePath(String),
}

/// Resolves (plugin, file) requests to servable resources: customization
/// policy, override storage, then snippet injection. Construct one per
/// pipeline and pass it down explicitly; there is no global instance.
pub struct ResourceResolver {
    policy: Box<dyn CustomizationPolicy + Send + Sync>,
    customization_dir: PathBuf,
    snippets: Arc<SnippetRegistry>,
}

impl ResourceResolver {
    pub fn new(
        policy: Box<dyn CustomizationPolicy + Send + Sync>,
        customization_dir: impl Into<PathBuf>,
        snippets: Arc<SnippetRegistry>,
    ) -> Self {
        Self {
            policy,
            customization_dir: customization_dir.into(),
            snippets,
        }
    }

    pub fn customization_dir(&self) -> &Path {
        &self.customization_dir
    }

    pub fn snippets(&self) -> &SnippetRegistry {
        &self.snippets
    }

    /// Resolve a resource, preferring an on-disk override when the policy
    /// allows one, then splice registered snippets into the result.
    ///
    /// `source` supplies the bundled original; it is invoked lazily and at
    /// most once per call.
    pub fn resolve<F>(
        &self,
        plugin_name: &str,
        file_name: &str,
        source: F,
    ) -> Result<WebResource, ResolveError>
    where
        F: FnOnce() -> WebResource,
    {
        let raw = self.fetch(plugin_name, file_name, source)?;
        Ok(self.snippets.apply(plugin_name, file_name, raw))
    }

    fn fetch<F>(
        &self,
        plugin_name: &str,
        file_name: &str,
        source: F,
    ) -> Result<WebResource, ResolveError>
    where
        F: FnOnce() -> WebResource,
    {
        match self.policy.is_customizable(plugin_name, file_name) {
            Ok(true) => self.read_or_write_override(file_name, source),
            Ok(false) => Ok(source()),
            Err(err) => {
                tracing::warn!(
                    plugin_name,
                    file_name,
                    %err,
                    "customization policy lookup failed, serving bundled resource"
                );
                Ok(source())
            }
        }
    }

    fn read_or_write_override<F>(
        &self,
        file_name: &str,
        source: F,
    ) -> Result<WebResource, ResolveError>
    where
        F: FnOnce() -> WebResource,
    {
        let relative = web_path::safe_relative(file_name)
            .ok_or_else(|| ResolveError::UnsafePath(file_name.to_string()))?;
        let path = self.customization_dir.join(relative);

        if path.exists() {
            return WebResource::from_file(&path)
                .map_err(|source| ResolveError::ReadOverride { path, source });
        }

        let original = source();
        if let Err(err) = write_override(&path, original.as_bytes()) {
            // Serve the page anyway; the copy can be retried on the next hit.
            tracing::warn!(
                path = %path.display(),
                %err,
                "failed to persist customizable copy"
            );
        } else {
            tracing::debug!(path = %path.display(), "wrote customizable copy");
        }
        Ok(original)
    }
}

/// Create-or-truncate write so a partial prior copy is fully overwritten.
fn write_override(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(bytes)?;
    Ok(())
}
