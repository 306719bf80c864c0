//! Conversation memory settings.

use serde::{Deserialize, Serialize};

/// Tutor session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Student/tutor exchanges kept in the prompt (valid range: 0-50).
    pub window_pairs: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { window_pairs: 2 }
    }
}
