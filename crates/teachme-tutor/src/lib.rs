//! Personalized tutoring sessions.
//!
//! A [`TutorSession`] renders a persona preamble from a
//! [`StudentProfile`], keeps the last few student/tutor exchanges in a
//! [`ConversationWindow`], and asks a [`CompletionClient`] for each reply.

pub mod error;
pub mod prompt;
pub mod session;
pub mod window;

pub use error::TutorError;
pub use prompt::{render_preamble, TUTOR_NAME};
pub use session::{TutorSession, DEFAULT_WINDOW_PAIRS, TEMPERATURE};
pub use window::{ConversationTurn, ConversationWindow, Speaker};

pub use teachme_ai::CompletionClient;
pub use teachme_common::StudentProfile;
