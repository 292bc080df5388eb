//! Path management for gasgen configuration files.
//!
//! Everything gasgen writes lives under a single directory, by default the
//! platform config directory (via `dirs`) with `gasgen` appended.

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "gasgen";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find the user config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Path layout for gasgen.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/gasgen/            # Config directory
/// ├── config.toml              # Application configuration
/// ├── secret.json              # Persisted Gemini API key (mode 600)
/// └── logs/                    # Application logs
///     └── gasgen.log.YYYY-MM-DD
/// ```
#[derive(Debug, Clone)]
pub struct GasgenPaths {
    root: PathBuf,
}

impl GasgenPaths {
    /// Resolves the layout under `base`, or under the platform config
    /// directory when `base` is `None`.
    pub fn new(base: Option<&Path>) -> Result<Self, PathError> {
        let root = match base {
            Some(base) => base.to_path_buf(),
            None => dirs::config_dir()
                .ok_or(PathError::ConfigDirNotFound)?
                .join(APP_DIR_NAME),
        };
        Ok(Self { root })
    }

    /// Shorthand for `GasgenPaths::new(None)`.
    pub fn platform_default() -> Result<Self, PathError> {
        Self::new(None)
    }

    pub fn config_dir(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// # Security Note
    ///
    /// Written with permissions 600 on Unix; see [`crate::storage::SecretStorage`].
    pub fn secret_file(&self) -> PathBuf {
        self.root.join("secret.json")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_layout_under_base() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GasgenPaths::new(Some(temp_dir.path())).unwrap();

        assert_eq!(paths.config_dir(), temp_dir.path());
        assert!(paths.config_file().ends_with("config.toml"));
        assert!(paths.secret_file().ends_with("secret.json"));
        assert!(paths.logs_dir().ends_with("logs"));
        assert!(paths.secret_file().starts_with(paths.config_dir()));
    }

    #[test]
    fn test_platform_default_ends_with_app_dir() {
        // Some CI sandboxes have no HOME; only check when resolvable.
        if let Ok(paths) = GasgenPaths::platform_default() {
            assert!(paths.config_dir().ends_with("gasgen"));
        }
    }
}
