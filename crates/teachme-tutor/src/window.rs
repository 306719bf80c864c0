//! Bounded conversation memory.
//!
//! The window keeps the most recent `2 * max_pairs` turns. Pushing past
//! that evicts from the front, oldest first.

use std::collections::VecDeque;
use std::fmt;

use crate::prompt::TUTOR_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Student,
    Tutor,
}

impl Speaker {
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::Student => "Student",
            Speaker::Tutor => TUTOR_NAME,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub text: String,
}

impl ConversationTurn {
    pub fn student(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Student,
            text: text.into(),
        }
    }

    pub fn tutor(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Tutor,
            text: text.into(),
        }
    }
}

impl fmt::Display for ConversationTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.speaker.label(), self.text)
    }
}

/// FIFO window over the latest student/tutor exchanges.
#[derive(Debug, Clone)]
pub struct ConversationWindow {
    turns: VecDeque<ConversationTurn>,
    max_pairs: usize,
}

impl ConversationWindow {
    pub fn new(max_pairs: usize) -> Self {
        Self {
            turns: VecDeque::with_capacity(max_pairs.saturating_mul(2)),
            max_pairs,
        }
    }

    pub fn max_pairs(&self) -> usize {
        self.max_pairs
    }

    /// Maximum number of turns retained.
    pub fn capacity(&self) -> usize {
        self.max_pairs.saturating_mul(2)
    }

    /// Append a turn, evicting the oldest turns beyond capacity.
    /// Returns how many turns were evicted.
    pub fn push(&mut self, turn: ConversationTurn) -> usize {
        self.turns.push_back(turn);
        let mut evicted = 0;
        while self.turns.len() > self.capacity() {
            self.turns.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Append a completed student/tutor exchange.
    pub fn push_exchange(&mut self, student: impl Into<String>, tutor: impl Into<String>) -> usize {
        self.push(ConversationTurn::student(student)) + self.push(ConversationTurn::tutor(tutor))
    }

    pub fn turns(&self) -> impl ExactSizeIterator<Item = &ConversationTurn> + '_ {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// One `Label: text` line per turn, oldest first, joined by newlines.
    pub fn render(&self) -> String {
        self.turns
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ConversationWindow {
    fn default() -> Self {
        Self::new(crate::session::DEFAULT_WINDOW_PAIRS)
    }
}
