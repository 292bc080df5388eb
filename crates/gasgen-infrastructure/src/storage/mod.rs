//! File-backed storage primitives.

mod secret_storage;

pub use secret_storage::{SecretFile, SecretStorage, SecretStorageError};
