//! Claude API client struct, request building, and response parsing.

use crate::http::{build_client, endpoint, STOP_SEQUENCE};
use crate::{AiError, Completion, TokenUsage};

use super::config::ClaudeConfig;

pub(crate) const MESSAGES_PATH: &str = "/v1/messages";
pub(crate) const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Claude API client.
pub struct ClaudeClient {
    pub(crate) config: ClaudeConfig,
    pub(crate) http: reqwest::Client,
}

impl ClaudeClient {
    pub fn new(config: ClaudeConfig) -> Self {
        let http = build_client(config.timeout);
        Self { config, http }
    }

    pub fn config(&self) -> &ClaudeConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        endpoint(&self.config.base_url, MESSAGES_PATH)
    }

    /// Build the JSON request body for the Messages API.
    pub(crate) fn build_request_body(&self, prompt: &str, temperature: f64) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": temperature,
            "stop_sequences": [STOP_SEQUENCE],
            "messages": [{
                "role": "user",
                "content": prompt,
            }],
        })
    }

    /// Parse a non-streaming response; the reply is the first text block.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<Completion, AiError> {
        let blocks = json["content"]
            .as_array()
            .ok_or_else(|| AiError::ParseError("no content in response".to_string()))?;

        let text = blocks
            .iter()
            .find_map(|b| {
                if b["type"] == "text" {
                    b["text"].as_str().map(String::from)
                } else {
                    None
                }
            })
            .ok_or_else(|| AiError::ParseError("no text block in response".to_string()))?;

        let usage = TokenUsage {
            input_tokens: json["usage"]["input_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["output_tokens"].as_u64().unwrap_or(0),
        };

        Ok(Completion { text, usage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ClaudeClient {
        ClaudeClient::new(ClaudeConfig::new("sk-ant-test").with_model("claude-test"))
    }

    #[test]
    fn prompt_is_sent_as_one_user_message() {
        let body = client().build_request_body("preamble\nStudent: hi\nTeach.me:", 0.0);
        assert_eq!(body["model"], "claude-test");
        assert_eq!(body["temperature"], 0.0);
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[0]["content"], "preamble\nStudent: hi\nTeach.me:");
        assert_eq!(body["stop_sequences"][0], "\nStudent:");
        assert!(body.get("system").is_none());
    }

    #[test]
    fn parses_first_text_block() {
        let json = serde_json::json!({
            "content": [
                { "type": "text", "text": "Let's start with what a budget is." },
                { "type": "text", "text": "ignored" }
            ],
            "usage": { "input_tokens": 120, "output_tokens": 11 }
        });
        let completion = client().parse_response(json).unwrap();
        assert_eq!(completion.text, "Let's start with what a budget is.");
        assert_eq!(completion.usage.total_tokens(), 131);
    }

    #[test]
    fn missing_content_is_a_parse_error() {
        let json = serde_json::json!({ "type": "error" });
        assert!(matches!(
            client().parse_response(json),
            Err(AiError::ParseError(_))
        ));
    }

    #[test]
    fn reply_without_text_block_is_a_parse_error() {
        let json = serde_json::json!({
            "content": [{ "type": "tool_use", "id": "toolu_1", "name": "lookup", "input": {} }],
            "usage": { "input_tokens": 50, "output_tokens": 3 }
        });
        let err = client().parse_response(json).unwrap_err();
        assert!(matches!(err, AiError::ParseError(ref msg) if msg == "no text block in response"));
    }

    #[test]
    fn api_url_defaults_to_anthropic() {
        assert_eq!(client().api_url(), "https://api.anthropic.com/v1/messages");
    }
}
