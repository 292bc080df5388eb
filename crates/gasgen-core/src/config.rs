use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL_NAME: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_OUTPUT_LANGUAGE: &str = "Japanese";

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RootConfig {
    #[serde(default = "default_model_name")]
    pub model_name: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Natural language for generated UI strings and explanations.
    #[serde(default = "default_output_language")]
    pub output_language: String,
    /// Whether a valid API key is written to `secret.json`.
    #[serde(default = "default_persist_credential")]
    pub persist_credential: bool,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            model_name: default_model_name(),
            api_base_url: default_api_base_url(),
            output_language: default_output_language(),
            persist_credential: default_persist_credential(),
        }
    }
}

fn default_model_name() -> String {
    DEFAULT_MODEL_NAME.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_output_language() -> String {
    DEFAULT_OUTPUT_LANGUAGE.to_string()
}

fn default_persist_credential() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: RootConfig = toml::from_str("output_language = \"English\"").unwrap();
        assert_eq!(config.output_language, "English");
        assert_eq!(config.model_name, DEFAULT_MODEL_NAME);
        assert!(config.persist_credential);
    }
}
