//! Credential Gate.
//!
//! Holds the session's API key. Generation is only possible while the gate
//! holds a key that passed the local shape check; whether the upstream
//! service accepts it is learned from the first call.

use gasgen_core::credential::Credential;
use gasgen_core::error::Result;
use gasgen_core::secret::CredentialStore;
use std::sync::Arc;

/// Outcome of a submission or restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialStatus {
    pub valid: bool,
}

pub struct CredentialGate {
    credential: Option<Credential>,
    /// Durable slot; `None` keeps the key in memory only.
    store: Option<Arc<dyn CredentialStore>>,
}

impl CredentialGate {
    pub fn new(store: Option<Arc<dyn CredentialStore>>) -> Self {
        Self {
            credential: None,
            store,
        }
    }

    /// A gate that never touches durable storage.
    pub fn in_memory() -> Self {
        Self::new(None)
    }

    /// Validates `raw` and, when valid, persists it best-effort.
    ///
    /// An invalid submission leaves the gate unset, replacing any key held
    /// before. A storage failure is logged and does not affect the result.
    pub async fn submit(&mut self, raw: &str) -> Result<CredentialStatus> {
        let credential = match Credential::parse(raw) {
            Ok(credential) => credential,
            Err(e) => {
                self.credential = None;
                tracing::info!("Rejected API key submission (bad shape)");
                return Err(e);
            }
        };

        if let Some(store) = &self.store {
            if let Err(e) = store.save_credential(credential.expose()).await {
                tracing::warn!("Failed to persist API key: {}", e);
            }
        }

        self.credential = Some(credential);
        tracing::info!("API key accepted");
        Ok(CredentialStatus { valid: true })
    }

    /// Loads the persisted key. A stored key that no longer passes the shape
    /// check, or an unreadable store, leaves the gate unset.
    pub async fn restore(&mut self) -> CredentialStatus {
        let Some(store) = &self.store else {
            return self.status();
        };

        match store.load_credential().await {
            Ok(Some(raw)) => match Credential::parse(&raw) {
                Ok(credential) => {
                    tracing::info!("Restored persisted API key");
                    self.credential = Some(credential);
                }
                Err(_) => {
                    tracing::warn!("Persisted API key has an invalid shape; ignoring it");
                    self.credential = None;
                }
            },
            Ok(None) => {
                tracing::debug!("No persisted API key");
            }
            Err(e) => {
                tracing::warn!("Failed to load persisted API key: {}", e);
            }
        }

        self.status()
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.credential.is_some()
    }

    pub fn status(&self) -> CredentialStatus {
        CredentialStatus {
            valid: self.is_ready(),
        }
    }
}
