//! Tutor session management.
//!
//! A `TutorSession` owns the student profile, the rendered preamble and
//! the conversation window, and talks to a shared completion backend.

mod chat;
mod manager;

#[cfg(test)]
mod tests;

pub use manager::{TutorSession, DEFAULT_WINDOW_PAIRS, TEMPERATURE};
