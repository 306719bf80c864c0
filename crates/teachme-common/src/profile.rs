//! Student profile used to personalize the tutor.
//!
//! A profile is built once and never changes afterwards. Every field has a
//! default, so an empty `[student]` table (or none at all) still yields a
//! usable profile.

use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "John Doe";
pub const DEFAULT_GRADE: u32 = 10;
pub const DEFAULT_SUBJECT: &str = "Financial Literacy";
pub const DEFAULT_INTERESTS: [&str; 3] = ["Video Games", "Computers", "F1 Racing"];

/// Who the tutor is talking to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentProfile {
    name: String,
    grade: u32,
    subject: String,
    interests: Vec<String>,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.into(),
            grade: DEFAULT_GRADE,
            subject: DEFAULT_SUBJECT.into(),
            interests: DEFAULT_INTERESTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl StudentProfile {
    pub fn new(
        name: impl Into<String>,
        grade: u32,
        subject: impl Into<String>,
        interests: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            grade,
            subject: subject.into(),
            interests,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_grade(mut self, grade: u32) -> Self {
        self.grade = grade;
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> u32 {
        self.grade
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }
}
