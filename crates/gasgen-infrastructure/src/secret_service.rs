//! File-backed credential store.
//!
//! Keeps the persisted API key in `secret.json` and caches what was last read
//! or written to avoid repeated file I/O.

use crate::paths::GasgenPaths;
use crate::storage::{SecretFile, SecretStorage, SecretStorageError};
use gasgen_core::error::{GasgenError, Result};
use gasgen_core::secret::CredentialStore;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// [`CredentialStore`] over a `secret.json` file.
#[derive(Clone)]
pub struct FileCredentialStore {
    /// Cached secret file content.
    /// Uses RwLock for thread-safe lazy loading.
    secrets: Arc<RwLock<Option<SecretFile>>>,
    storage: Arc<SecretStorage>,
}

impl FileCredentialStore {
    /// Store at `<paths>/secret.json`.
    pub fn new(paths: &GasgenPaths) -> Self {
        Self::with_path(paths.secret_file())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            secrets: Arc::new(RwLock::new(None)),
            storage: Arc::new(SecretStorage::new(path)),
        }
    }

    /// Loads the secret file if not already cached.
    fn load_secrets_internal(&self) -> Result<SecretFile> {
        {
            let read_lock = self.secrets.read().map_err(lock_poisoned)?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self
            .storage
            .load()
            .map_err(storage_error)?
            .unwrap_or_default();

        {
            let mut write_lock = self.secrets.write().map_err(lock_poisoned)?;
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }
}

fn storage_error(err: SecretStorageError) -> GasgenError {
    GasgenError::storage(err.to_string())
}

fn lock_poisoned<T>(_: std::sync::PoisonError<T>) -> GasgenError {
    GasgenError::internal("secret cache lock poisoned")
}

#[async_trait::async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load_credential(&self) -> Result<Option<String>> {
        let secrets = self.load_secrets_internal()?;
        Ok(secrets
            .gemini_api_key
            .filter(|key| !key.trim().is_empty()))
    }

    async fn save_credential(&self, raw: &str) -> Result<()> {
        let secrets = SecretFile {
            gemini_api_key: Some(raw.to_string()),
        };
        self.storage.save(&secrets).map_err(storage_error)?;
        tracing::debug!("Credential persisted to {}", self.storage.path().display());

        let mut write_lock = self.secrets.write().map_err(lock_poisoned)?;
        *write_lock = Some(secrets);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_loads_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::with_path(temp_dir.path().join("secret.json"));

        assert_eq!(store.load_credential().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load_from_fresh_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.json");

        let store = FileCredentialStore::with_path(path.clone());
        store.save_credential("AIza-saved").await.unwrap();
        assert_eq!(
            store.load_credential().await.unwrap().as_deref(),
            Some("AIza-saved")
        );

        let reopened = FileCredentialStore::with_path(path);
        assert_eq!(
            reopened.load_credential().await.unwrap().as_deref(),
            Some("AIza-saved")
        );
    }

    #[tokio::test]
    async fn test_blank_stored_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.json");
        std::fs::write(&path, r#"{ "gemini_api_key": "  " }"#).unwrap();

        let store = FileCredentialStore::with_path(path);
        assert_eq!(store.load_credential().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileCredentialStore::with_path(path);
        let err = store.load_credential().await.unwrap_err();
        assert!(err.is_storage());
    }

    #[tokio::test]
    async fn test_unwritable_location_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the parent directory should be.
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let store = FileCredentialStore::with_path(blocker.join("secret.json"));
        let err = store.save_credential("AIza-x").await.unwrap_err();
        assert!(err.is_storage());
    }
}
