//! OpenAI text-completions client.
//!
//! Implements `CompletionClient` against the legacy completions endpoint
//! (`/v1/completions`), which takes a single rendered prompt string.

mod api;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
