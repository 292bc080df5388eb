//! Error types for the gasgen assistant.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Substrings the Gemini API uses when it rejects the API key itself.
const CREDENTIAL_REJECTION_MARKERS: &[&str] = &["API key not valid", "API_KEY_INVALID"];

/// A shared error type for the entire assistant.
///
/// The first five variants are the user-facing taxonomy: each one is rendered
/// inline by the front end and never aborts the session. The remaining
/// variants cover the ambient plumbing (files, serialization, templates).
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GasgenError {
    /// User input missing or malformed; the operation was not attempted.
    #[error("{0}")]
    Validation(String),

    /// Credential absent or not of the expected shape; no request was sent.
    #[error("{0}")]
    Auth(String),

    /// The upstream API rejected the credential.
    #[error("The configured API key was rejected. Check your Gemini API key and enter it again. ({0})")]
    InvalidCredential(String),

    /// Any other upstream failure.
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Durable credential storage failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Prompt template rendering error
    #[error("Template error: {0}")]
    Template(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GasgenError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Classifies an upstream failure message.
    ///
    /// Messages carrying one of the known key-rejection markers become
    /// `InvalidCredential`; everything else is a plain `Generation` error.
    pub fn from_upstream(message: impl Into<String>) -> Self {
        let message = message.into();
        if CREDENTIAL_REJECTION_MARKERS
            .iter()
            .any(|marker| message.contains(marker))
        {
            Self::InvalidCredential(message)
        } else {
            Self::Generation(message)
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    pub fn is_invalid_credential(&self) -> bool {
        matches!(self, Self::InvalidCredential(_))
    }

    pub fn is_generation(&self) -> bool {
        matches!(self, Self::Generation(_))
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for GasgenError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for GasgenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for GasgenError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for GasgenError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<minijinja::Error> for GasgenError {
    fn from(err: minijinja::Error) -> Self {
        Self::Template(err.to_string())
    }
}

/// A type alias for `Result<T, GasgenError>`.
pub type Result<T> = std::result::Result<T, GasgenError>;
