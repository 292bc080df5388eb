//! GeminiApiAgent - Direct REST API implementation for Gemini.
//!
//! Sends one `generateContent` request per call. The API key travels only as
//! the `key` query parameter and is stripped from transport error messages.

use async_trait::async_trait;
use gasgen_core::backend::LlmBackend;
use gasgen_core::config::{DEFAULT_API_BASE_URL, RootConfig};
use gasgen_core::credential::Credential;
use gasgen_core::error::{GasgenError, Result};
use gasgen_core::prompt::PromptRequest;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// [`LlmBackend`] that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiAgent {
    client: Client,
    base_url: String,
    model: String,
}

impl GeminiApiAgent {
    /// Creates a new agent for `model` on the public endpoint.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            // No timeout: a request runs until the service answers.
            client: Client::new(),
            base_url: DEFAULT_API_BASE_URL.to_string(),
            model: model.into(),
        }
    }

    pub fn from_config(config: &RootConfig) -> Self {
        Self::new(config.model_name.clone()).with_base_url(config.api_base_url.clone())
    }

    /// Overrides the endpoint root (everything before `/{model}:generateContent`).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }

    async fn send_request(
        &self,
        body: &GenerateContentRequest,
        credential: &Credential,
    ) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", credential.expose())])
            .json(body)
            .send()
            .await
            .map_err(|err| {
                GasgenError::generation(format!(
                    "Gemini API request failed: {}",
                    err.without_url()
                ))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, &body_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            GasgenError::generation(format!(
                "Failed to parse Gemini response: {}",
                err.without_url()
            ))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl LlmBackend for GeminiApiAgent {
    async fn generate_content(
        &self,
        request: &PromptRequest,
        credential: &Credential,
    ) -> Result<String> {
        let body = GenerateContentRequest::from_prompt(request);
        tracing::debug!(
            "Gemini {} request: model={}, contents={} chars, temperature={}",
            request.kind.label(),
            self.model,
            request.contents.len(),
            request.temperature()
        );
        let text = self.send_request(&body, credential).await?;
        tracing::debug!("Gemini response: {} chars", text.len());
        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: SystemInstruction,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn from_prompt(request: &PromptRequest) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: request.contents.clone(),
                }],
            }],
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: request.system_instruction.clone(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: request.temperature(),
            },
        }
    }
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    code: Option<i32>,
    message: Option<String>,
    status: Option<String>,
}

/// First text part of the first candidate.
fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            GasgenError::generation("Gemini API returned no text in the response candidates")
        })
}

/// `"<STATUS>: <message>"` from the error envelope, or the raw body.
fn map_http_error(status: StatusCode, body: &str) -> GasgenError {
    let message = serde_json::from_str::<ErrorWrapper>(body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.to_string());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                format!("HTTP {}", status.as_u16())
            } else {
                body.to_string()
            }
        });

    tracing::warn!("Gemini API returned {}: {}", status.as_u16(), message);
    GasgenError::from_upstream(message)
}
