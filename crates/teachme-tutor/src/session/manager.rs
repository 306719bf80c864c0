//! Session struct, construction, and read-only views.

use std::sync::Arc;

use teachme_ai::{CompletionClient, TokenTracker};
use teachme_common::{SessionId, StudentProfile};
use tracing::debug;

use crate::prompt::{render_context, render_preamble};
use crate::window::ConversationWindow;

/// Exchanges remembered when no window size is configured.
pub const DEFAULT_WINDOW_PAIRS: usize = 2;

/// Sampling temperature for every completion (greedy decoding).
pub const TEMPERATURE: f64 = 0.0;

/// A personalized conversation with one student.
pub struct TutorSession {
    pub(super) id: SessionId,
    pub(super) profile: StudentProfile,
    /// Rendered once at construction.
    pub(super) preamble: String,
    pub(super) window: ConversationWindow,
    pub(super) client: Arc<dyn CompletionClient>,
    pub(super) tracker: TokenTracker,
}

impl TutorSession {
    pub fn new(profile: StudentProfile, client: Arc<dyn CompletionClient>) -> Self {
        let preamble = render_preamble(&profile);
        let id = SessionId::new();
        debug!(
            session = %id.short(),
            student = %profile.name(),
            provider = %client.provider(),
            "tutor session created"
        );
        Self {
            id,
            profile,
            preamble,
            window: ConversationWindow::new(DEFAULT_WINDOW_PAIRS),
            client,
            tracker: TokenTracker::new(),
        }
    }

    /// Remember `pairs` student/tutor exchanges instead of the default.
    /// Any turns already held are discarded.
    pub fn with_window_pairs(mut self, pairs: usize) -> Self {
        self.window = ConversationWindow::new(pairs);
        self
    }

    /// The prompt `say(input)` would send right now.
    pub fn render_prompt(&self, input: &str) -> String {
        render_context(&self.preamble, &self.window, input)
    }

    /// Remembered turns as alternating `Student:` / `Teach.me:` lines.
    pub fn history(&self) -> String {
        self.window.render()
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn profile(&self) -> &StudentProfile {
        &self.profile
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn window(&self) -> &ConversationWindow {
        &self.window
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    /// Forget the conversation; the preamble stays.
    pub fn clear(&mut self) {
        debug!(session = %self.id.short(), "clearing conversation window");
        self.window.clear();
    }
}
