//! Anthropic Claude API client.
//!
//! Implements `CompletionClient` for Claude models via the Anthropic
//! Messages API. The rendered tutor prompt goes out as a single user
//! message.

mod api;
mod client;
mod config;

pub use client::ClaudeClient;
pub use config::ClaudeConfig;
