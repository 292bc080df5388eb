//! Boundary to the hosted language model.

use crate::credential::Credential;
use crate::error::Result;
use crate::prompt::PromptRequest;

/// A single-shot text generation endpoint.
///
/// Implementations send exactly one request per call and return the raw
/// response text (fences and all). Upstream failures are reported as
/// [`crate::GasgenError::from_upstream`] so that key rejections can be told
/// apart from other failures.
#[async_trait::async_trait]
pub trait LlmBackend: Send + Sync {
    async fn generate_content(
        &self,
        request: &PromptRequest,
        credential: &Credential,
    ) -> Result<String>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}
