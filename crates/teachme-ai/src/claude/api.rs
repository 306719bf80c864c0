//! CompletionClient implementation for ClaudeClient.

use async_trait::async_trait;
use tracing::debug;

use crate::http::send_json;
use crate::{AiError, Completion, CompletionClient};

use super::client::{ClaudeClient, ANTHROPIC_VERSION};

#[async_trait]
impl CompletionClient for ClaudeClient {
    async fn complete(&self, prompt: &str, temperature: f64) -> Result<Completion, AiError> {
        let body = self.build_request_body(prompt, temperature);

        debug!(model = %self.config.model, prompt_chars = prompt.len(), "Claude API request");

        let request = self
            .http
            .post(self.api_url())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body);

        let json = send_json(request).await?;
        self.parse_response(json)
    }

    fn provider(&self) -> &str {
        "claude"
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
