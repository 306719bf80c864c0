//! Session behaviour against a scripted completion backend.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use teachme_ai::{AiError, Completion, CompletionClient, TokenUsage};
use teachme_common::StudentProfile;

use super::*;
use crate::error::TutorError;

/// Replies from a queue and records every prompt it was sent.
#[derive(Default)]
struct ScriptedClient {
    replies: Mutex<VecDeque<Result<Completion, AiError>>>,
    calls: Mutex<Vec<(String, f64)>>,
}

impl ScriptedClient {
    fn with_replies<I>(replies: I) -> Arc<Self>
    where
        I: IntoIterator<Item = Result<Completion, AiError>>,
    {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn answering(texts: &[&str]) -> Arc<Self> {
        Self::with_replies(texts.iter().map(|t| Ok(Completion::new(*t))))
    }

    fn calls(&self) -> Vec<(String, f64)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, prompt: &str, temperature: f64) -> Result<Completion, AiError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), temperature));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AiError::ApiError("script exhausted".into())))
    }

    fn provider(&self) -> &str {
        "scripted"
    }
}

fn texts(session: &TutorSession) -> Vec<String> {
    session.window().turns().map(|t| t.text.clone()).collect()
}

#[tokio::test]
async fn say_returns_trimmed_reply_and_records_exchange() {
    let client = ScriptedClient::answering(&[" What do you think a budget is?\n"]);
    let mut session = TutorSession::new(StudentProfile::default(), client.clone());

    let reply = session.say("Teach me budgeting").await.unwrap();
    assert_eq!(reply, "What do you think a budget is?");
    assert_eq!(
        session.history(),
        "Student: Teach me budgeting\nTeach.me: What do you think a budget is?"
    );
}

#[tokio::test]
async fn prompt_is_preamble_then_cue_at_temperature_zero() {
    let client = ScriptedClient::answering(&["ok"]);
    let mut session = TutorSession::new(StudentProfile::default(), client.clone());
    let preamble = session.preamble().to_string();

    session.say("hi").await.unwrap();

    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    let (prompt, temperature) = &calls[0];
    assert_eq!(*temperature, 0.0);
    assert!(prompt.starts_with(&preamble));
    assert!(prompt.ends_with("Student: hi\nTeach.me:"));
}

#[tokio::test]
async fn later_prompts_include_remembered_turns() {
    let client = ScriptedClient::answering(&["a1", "a2"]);
    let mut session = TutorSession::new(StudentProfile::default(), client.clone());

    session.say("q1").await.unwrap();
    session.say("q2").await.unwrap();

    let (prompt, _) = &client.calls()[1];
    assert!(prompt.ends_with("Student: q1\nTeach.me: a1\nStudent: q2\nTeach.me:"));
}

#[tokio::test]
async fn third_exchange_evicts_the_first() {
    let client = ScriptedClient::answering(&["a1", "a2", "a3"]);
    let mut session = TutorSession::new(StudentProfile::default(), client);

    for q in ["q1", "q2", "q3"] {
        session.say(q).await.unwrap();
    }

    assert_eq!(texts(&session), ["q2", "a2", "q3", "a3"]);
}

#[tokio::test]
async fn window_holds_at_most_k_pairs() {
    for pairs in [0usize, 1, 3] {
        let replies: Vec<String> = (0..6).map(|n| format!("a{n}")).collect();
        let refs: Vec<&str> = replies.iter().map(String::as_str).collect();
        let client = ScriptedClient::answering(&refs);
        let mut session =
            TutorSession::new(StudentProfile::default(), client).with_window_pairs(pairs);

        for n in 0..6 {
            session.say(format!("q{n}")).await.unwrap();
            assert_eq!(session.window().len(), (n + 1).min(pairs) * 2);
        }
        if pairs > 0 {
            assert_eq!(texts(&session).last().map(String::as_str), Some("a5"));
        }
    }
}

#[tokio::test]
async fn failed_completion_leaves_window_unchanged() {
    let client = ScriptedClient::with_replies([
        Ok(Completion::new("a1")),
        Err(AiError::RateLimited),
    ]);
    let mut session = TutorSession::new(StudentProfile::default(), client);

    session.say("q1").await.unwrap();
    let before = session.history();

    let err = session.say("q2").await.unwrap_err();
    assert!(matches!(
        err,
        TutorError::CompletionUnavailable(AiError::RateLimited)
    ));
    assert_eq!(session.history(), before);
    assert_eq!(session.window().len(), 2);
}

#[tokio::test]
async fn failure_is_not_retried() {
    let client = ScriptedClient::with_replies([Err(AiError::Timeout), Ok(Completion::new("late"))]);
    let mut session = TutorSession::new(StudentProfile::default(), client.clone());

    assert!(session.say("q").await.is_err());
    assert_eq!(client.calls().len(), 1);
    assert!(session.window().is_empty());
}

#[tokio::test]
async fn history_is_idempotent() {
    let client = ScriptedClient::answering(&["a1"]);
    let mut session = TutorSession::new(StudentProfile::default(), client);
    assert_eq!(session.history(), "");

    session.say("q1").await.unwrap();
    let first = session.history();
    assert_eq!(session.history(), first);
    assert_eq!(session.history(), first);
}

#[tokio::test]
async fn usage_is_tracked_per_provider() {
    let client = ScriptedClient::with_replies([Ok(Completion {
        text: "a".into(),
        usage: TokenUsage {
            input_tokens: 40,
            output_tokens: 2,
        },
    })]);
    let mut session = TutorSession::new(StudentProfile::default(), client);

    session.say("q").await.unwrap();
    assert_eq!(session.tracker().call_count(), 1);
    assert_eq!(session.tracker().total_tokens(), 42);
    assert!(session.tracker().for_provider("scripted").is_some());
}

#[tokio::test]
async fn clear_forgets_turns_but_keeps_preamble() {
    let client = ScriptedClient::answering(&["a1", "a2"]);
    let mut session = TutorSession::new(StudentProfile::default(), client.clone());
    let preamble = session.preamble().to_string();

    session.say("q1").await.unwrap();
    session.clear();
    assert_eq!(session.history(), "");
    assert_eq!(session.preamble(), preamble);

    session.say("q2").await.unwrap();
    let (prompt, _) = &client.calls()[1];
    assert!(!prompt.contains("q1"));
}

#[test]
fn preamble_is_personalized() {
    let profile = StudentProfile::new("Ana", 5, "Math", vec!["Drawing".into()]);
    let session = TutorSession::new(profile, ScriptedClient::answering(&[]));
    let preamble = session.preamble();
    assert!(preamble.contains("Ana"));
    assert!(preamble.contains("Grade: 5"));
    assert!(preamble.contains("Math"));
    assert!(preamble.contains("Drawing"));
    assert_eq!(session.profile().name(), "Ana");
}

#[test]
fn sessions_get_distinct_ids() {
    let a = TutorSession::new(StudentProfile::default(), ScriptedClient::answering(&[]));
    let b = TutorSession::new(StudentProfile::default(), ScriptedClient::answering(&[]));
    assert_ne!(a.id(), b.id());
    assert_eq!(a.window().max_pairs(), DEFAULT_WINDOW_PAIRS);
}
