//! Completion backends for teachme.
//!
//! Provides the `CompletionClient` seam the tutor talks through, plus:
//! - an OpenAI text-completions client
//! - an Anthropic Claude Messages client
//! - token usage tracking

pub mod claude;
mod http;
pub mod openai;
pub mod token_tracker;

use async_trait::async_trait;

pub use claude::{ClaudeClient, ClaudeConfig};
pub use openai::{OpenAiClient, OpenAiConfig};
pub use token_tracker::TokenTracker;

/// A text-in, text-out language model.
///
/// Implementations send exactly one request per call and never retry.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str, temperature: f64) -> Result<Completion, AiError>;

    /// Provider label used for usage accounting.
    fn provider(&self) -> &str {
        "custom"
    }

    fn model(&self) -> &str {
        "unknown"
    }
}

#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub usage: TokenUsage,
}

impl Completion {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: TokenUsage::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Not configured: {0}")]
    NotConfigured(String),
}
