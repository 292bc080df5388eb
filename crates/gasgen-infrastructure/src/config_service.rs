//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` and caches it.

use crate::paths::GasgenPaths;
use gasgen_core::config::RootConfig;
use gasgen_core::error::{GasgenError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the root configuration.
///
/// A missing file is created with defaults (best-effort). An unreadable or
/// malformed file falls back to defaults with a warning; the app never refuses
/// to start over configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Service for `<paths>/config.toml`.
    pub fn new(paths: &GasgenPaths) -> Self {
        Self::with_path(paths.config_file())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the root configuration, loading from file if not cached.
    pub fn get_config(&self) -> RootConfig {
        if let Ok(read_lock) = self.config.read() {
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = match self.load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "Failed to load {}: {}. Using defaults.",
                    self.path.display(),
                    e
                );
                RootConfig::default()
            }
        };

        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    fn load_config(&self) -> Result<RootConfig> {
        if !self.path.exists() {
            let default_config = RootConfig::default();
            if let Err(e) = self.write_config(&default_config) {
                tracing::warn!(
                    "Could not write default config to {}: {}",
                    self.path.display(),
                    e
                );
            }
            return Ok(default_config);
        }

        let content = fs::read_to_string(&self.path)?;
        let config: RootConfig = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", self.path.display());
        Ok(config)
    }

    fn write_config(&self, config: &RootConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(config)?;
        fs::write(&self.path, content).map_err(|e| {
            GasgenError::config(format!("cannot write {}: {}", self.path.display(), e))
        })
    }
}
