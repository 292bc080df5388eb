//! Application layer for gasgen.
//!
//! This crate provides the use cases that coordinate the domain types in
//! `gasgen-core` with a language-model backend and a credential store.

pub mod credential_gate;
pub mod generation_client;
pub mod session_usecase;

pub use credential_gate::{CredentialGate, CredentialStatus};
pub use generation_client::GenerationClient;
pub use session_usecase::AssistantSession;
