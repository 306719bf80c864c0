//! Completion backend selection.

use serde::{Deserialize, Serialize};

/// Which hosted completion API the tutor talks to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    OpenAi,
    Claude,
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAi),
            "claude" | "anthropic" => Ok(Provider::Claude),
            other => Err(format!("unknown provider '{other}' (expected openai or claude)")),
        }
    }
}

/// Model and transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub provider: Provider,
    /// Model name; the backend's own default when unset.
    pub model: Option<String>,
    /// Valid range: 1-8192.
    pub max_tokens: u32,
    /// Overrides the provider's API host, e.g. for a compatible local server.
    pub base_url: Option<String>,
    /// Request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: Provider::OpenAi,
            model: None,
            max_tokens: 256,
            base_url: None,
            timeout_secs: 60,
        }
    }
}
