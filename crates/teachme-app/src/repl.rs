//! Line-oriented conversation loop.

use teachme_tutor::{TutorSession, TUTOR_NAME};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Say(String),
    History,
    Clear,
    Usage,
    Help,
    Quit,
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "" => Command::Empty,
            "/history" => Command::History,
            "/clear" => Command::Clear,
            "/usage" => Command::Usage,
            "/help" => Command::Help,
            "/quit" | "/exit" => Command::Quit,
            text => Command::Say(text.to_string()),
        }
    }
}

const HELP: &str = "commands: /history  /clear  /usage  /help  /quit";

/// Greet the student, then answer lines from `input` until `/quit` or EOF.
///
/// A failed turn is reported on `output` and the loop keeps going.
pub async fn run<R, W>(
    session: &mut TutorSession,
    input: R,
    output: &mut W,
) -> teachme_common::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let greeting = format!(
        "{TUTOR_NAME}: Hello {}, I'm {TUTOR_NAME}.  What would you like to learn about today?\n({HELP})\n",
        session.profile().name()
    );
    output.write_all(greeting.as_bytes()).await?;

    let mut lines = input.lines();
    loop {
        output.write_all(b"> ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let text = match Command::parse(&line) {
            Command::Empty => continue,
            Command::Quit => break,
            Command::Help => format!("{HELP}\n"),
            Command::History => {
                let history = session.history();
                if history.is_empty() {
                    "(no conversation yet)\n".to_string()
                } else {
                    format!("{history}\n")
                }
            }
            Command::Clear => {
                session.clear();
                "(conversation cleared)\n".to_string()
            }
            Command::Usage => {
                let tracker = session.tracker();
                let mut usage = format!(
                    "{} calls, {} input tokens, {} output tokens\n",
                    tracker.call_count(),
                    tracker.total().input_tokens,
                    tracker.total().output_tokens
                );
                if let Some(last) = tracker.last() {
                    usage.push_str(&format!("last call: {} tokens\n", last.total_tokens()));
                }
                usage
            }
            Command::Say(text) => match session.say(text).await {
                Ok(reply) => format!("{TUTOR_NAME}: {reply}\n"),
                Err(e) => format!("error: {e}\n"),
            },
        };
        output.write_all(text.as_bytes()).await?;
    }

    info!(
        session = %session.id().short(),
        calls = session.tracker().call_count(),
        "conversation ended"
    );
    output.write_all(b"Goodbye!\n").await?;
    output.flush().await?;
    Ok(())
}
