pub mod backend;
pub mod category;
pub mod config;
pub mod credential;
pub mod error;
pub mod error_report;
pub mod feature;
pub mod history;
pub mod prompt;
pub mod secret;
pub mod view;

// Re-export common types
pub use category::Category;
pub use credential::Credential;
pub use error::{GasgenError, Result};
