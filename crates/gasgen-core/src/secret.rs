//! Credential persistence trait.
//!
//! Defines the interface for the single durable credential slot.

use crate::error::Result;

/// Durable storage for the API key.
///
/// Implementations should ensure that:
/// - The stored value is readable by the current user only
/// - The value is never logged or echoed in error messages
#[async_trait::async_trait]
pub trait CredentialStore: Send + Sync {
    /// Loads the persisted key, if any.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(raw))`: A value is stored (it may no longer be valid)
    /// - `Ok(None)`: Nothing has been stored yet
    /// - `Err(GasgenError::Storage)`: The slot could not be read
    async fn load_credential(&self) -> Result<Option<String>>;

    /// Persists the key, replacing any previous value.
    async fn save_credential(&self, raw: &str) -> Result<()>;
}
