//! CompletionClient implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::http::send_json;
use crate::{AiError, Completion, CompletionClient};

use super::client::OpenAiClient;

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &str, temperature: f64) -> Result<Completion, AiError> {
        let body = self.build_request_body(prompt, temperature);

        debug!(model = %self.config.model, prompt_chars = prompt.len(), "OpenAI completion request");

        let request = self
            .http
            .post(self.api_url())
            .bearer_auth(&self.config.api_key)
            .json(&body);

        let json = send_json(request).await?;
        self.parse_response(json)
    }

    fn provider(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
