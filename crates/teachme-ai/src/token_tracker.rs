//! Token usage accounting for a tutoring session.

use std::collections::HashMap;

use crate::TokenUsage;

/// Cumulative token usage, overall and per provider.
#[derive(Debug, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    by_provider: HashMap<String, TokenUsage>,
    last: Option<TokenUsage>,
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the usage reported for one completion.
    pub fn record(&mut self, provider: &str, usage: &TokenUsage) {
        accumulate(&mut self.total, usage);
        accumulate(
            self.by_provider.entry(provider.to_string()).or_default(),
            usage,
        );
        self.last = Some(usage.clone());
        self.call_count += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn for_provider(&self, provider: &str) -> Option<&TokenUsage> {
        self.by_provider.get(provider)
    }

    /// Usage of the most recent completion.
    pub fn last(&self) -> Option<&TokenUsage> {
        self.last.as_ref()
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}

fn accumulate(into: &mut TokenUsage, usage: &TokenUsage) {
    into.input_tokens = into.input_tokens.saturating_add(usage.input_tokens);
    into.output_tokens = into.output_tokens.saturating_add(usage.output_tokens);
}
