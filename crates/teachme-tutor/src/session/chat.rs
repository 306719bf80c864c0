//! The conversational turn.

use tracing::{debug, warn};

use crate::error::TutorError;

use super::manager::{TutorSession, TEMPERATURE};

impl TutorSession {
    /// Send the student's `input` and return the tutor's reply.
    ///
    /// The window only changes once a reply arrives: on failure it is left
    /// exactly as it was, with no unanswered student turn.
    pub async fn say(&mut self, input: impl Into<String>) -> Result<String, TutorError> {
        let input = input.into();
        let prompt = self.render_prompt(&input);

        debug!(session = %self.id.short(), "prompt:\n{prompt}");

        let completion = self
            .client
            .complete(&prompt, TEMPERATURE)
            .await
            .inspect_err(|e| warn!(session = %self.id.short(), "completion failed: {e}"))?;

        self.tracker.record(self.client.provider(), &completion.usage);

        let reply = completion.text.trim().to_string();
        let evicted = self.window.push_exchange(input, reply.clone());
        debug!(
            session = %self.id.short(),
            evicted,
            turns = self.window.len(),
            tokens = completion.usage.total_tokens(),
            "exchange recorded"
        );

        Ok(reply)
    }
}
