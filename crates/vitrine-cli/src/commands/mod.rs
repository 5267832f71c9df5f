pub mod config;
pub mod layout;
pub mod replay;

use std::path::Path;

use anyhow::{Context, Result};
use vitrine_core::config::{load_config, VitrineConfig};

/// Load `path` if given, otherwise fall back to defaults.
pub(crate) fn resolve_config(path: Option<&Path>) -> Result<VitrineConfig> {
    match path {
        Some(p) => load_config(p).with_context(|| format!("Failed to load config {}", p.display())),
        None => Ok(VitrineConfig::default()),
    }
}
