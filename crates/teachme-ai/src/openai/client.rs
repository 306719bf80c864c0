//! OpenAI client struct, request building, and response parsing.

use crate::http::{build_client, endpoint, STOP_SEQUENCE};
use crate::{AiError, Completion, TokenUsage};

use super::config::OpenAiConfig;

pub(crate) const COMPLETIONS_PATH: &str = "/v1/completions";

/// OpenAI completions client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        let http = build_client(config.timeout);
        Self { config, http }
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        endpoint(&self.config.base_url, COMPLETIONS_PATH)
    }

    pub(crate) fn build_request_body(&self, prompt: &str, temperature: f64) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "prompt": prompt,
            "temperature": temperature,
            "max_tokens": self.config.max_tokens,
            "stop": [STOP_SEQUENCE],
        })
    }

    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<Completion, AiError> {
        let text = json["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["text"].as_str())
            .ok_or_else(|| AiError::ParseError("no choices in response".to_string()))?
            .to_string();

        let usage = TokenUsage {
            input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        Ok(Completion { text, usage })
    }
}
