//! Builds the completion backend selected in the config.

use std::sync::Arc;
use std::time::Duration;

use teachme_ai::{AiError, ClaudeClient, ClaudeConfig, CompletionClient, OpenAiClient, OpenAiConfig};
use teachme_config::{ModelConfig, Provider};

/// Construct the configured backend, reading its API key from the environment.
pub fn build_client(model: &ModelConfig) -> Result<Arc<dyn CompletionClient>, AiError> {
    let timeout = Duration::from_secs(model.timeout_secs);

    let client: Arc<dyn CompletionClient> = match model.provider {
        Provider::OpenAi => {
            let mut config = OpenAiConfig::from_env()?
                .with_max_tokens(model.max_tokens)
                .with_timeout(timeout);
            if let Some(ref name) = model.model {
                config = config.with_model(name);
            }
            if let Some(ref url) = model.base_url {
                config = config.with_base_url(url);
            }
            Arc::new(OpenAiClient::new(config))
        }
        Provider::Claude => {
            let mut config = ClaudeConfig::from_env()?
                .with_max_tokens(model.max_tokens)
                .with_timeout(timeout);
            if let Some(ref name) = model.model {
                config = config.with_model(name);
            }
            if let Some(ref url) = model.base_url {
                config = config.with_base_url(url);
            }
            Arc::new(ClaudeClient::new(config))
        }
    };

    Ok(client)
}
