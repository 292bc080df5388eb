//! Secret file storage.
//!
//! Reads and writes the single persisted credential slot in `secret.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur during secret storage operations.
#[derive(Debug)]
pub enum SecretStorageError {
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON parsing or serialization error.
    ParseError(serde_json::Error),
}

impl std::fmt::Display for SecretStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretStorageError::IoError(e) => write!(f, "I/O error: {}", e),
            SecretStorageError::ParseError(e) => write!(f, "JSON parse error: {}", e),
        }
    }
}

impl std::error::Error for SecretStorageError {}

impl From<std::io::Error> for SecretStorageError {
    fn from(e: std::io::Error) -> Self {
        SecretStorageError::IoError(e)
    }
}

impl From<serde_json::Error> for SecretStorageError {
    fn from(e: serde_json::Error) -> Self {
        SecretStorageError::ParseError(e)
    }
}

/// On-disk shape of `secret.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecretFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
}

/// Storage for the secret file (secret.json).
///
/// Responsibilities:
/// - Load and parse secret.json
/// - Write it back with owner-only permissions
///
/// Does NOT:
/// - Validate the key shape
/// - Handle encryption (plaintext JSON storage)
pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the secret file.
    ///
    /// # Returns
    ///
    /// - `Ok(None)`: File doesn't exist
    /// - `Ok(Some(SecretFile))`: Successfully loaded and parsed
    /// - `Err(SecretStorageError)`: Unreadable file or invalid JSON
    pub fn load(&self) -> Result<Option<SecretFile>, SecretStorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Some(SecretFile::default()));
        }
        let secrets = serde_json::from_str(&content)?;

        Ok(Some(secrets))
    }

    /// Writes the secret file, creating the parent directory if needed.
    ///
    /// # Security Note
    ///
    /// Sets file permissions to 600 (user read/write only) on Unix systems.
    pub fn save(&self, secrets: &SecretFile) -> Result<(), SecretStorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(secrets)?;
        fs::write(&self.path, json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&self.path, permissions)?;
        }

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
