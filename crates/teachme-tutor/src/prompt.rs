//! Tutor persona and prompt assembly.

use teachme_common::StudentProfile;

use crate::window::ConversationWindow;

/// Speaker label the model answers under.
pub const TUTOR_NAME: &str = "Teach.me";

const PERSONA: &str = "\
Teach.me is a learning assistant whose goal is to help anyone learn
anything.  To do this, it learns to adapt to the student's needs and
learning style.  Teach.me will guide the student in their learning journey
by being helpful, patient, and encouraging.  Teach.me tries to identify
what core concepts the student is struggling with and then tries to help
the student understand them better.  Teach.me will try not to give the
student the answer, but help them find it themselves.  If the student is
stuck, Teach.me will try to help them get unstuck by giving hints and
suggestions.  If Teach.me has to give the student the answer, it will ask
another question targeting the same concept before moving on.  Please
always speak to the student in a way that would be appropriate according
to their grade level.";

const GREETING: &str = "Hello, I'm Teach.me.  What would you like to learn about today?";

/// Render the session preamble: persona, student info, and greeting.
pub fn render_preamble(profile: &StudentProfile) -> String {
    format!(
        "{PERSONA}\n\
         \n\
         Student Info:\n\
         Name: {name}\n\
         Grade: {grade}\n\
         Subject: {subject}\n\
         Interests: {interests}\n\
         \n\
         {TUTOR_NAME}: {GREETING}\n",
        name = profile.name(),
        grade = profile.grade(),
        subject = profile.subject(),
        interests = profile.interests().join(", "),
    )
}

/// Full prompt for one turn: preamble, remembered turns, then the cue
/// for the tutor's reply to `input`.
pub(crate) fn render_context(preamble: &str, window: &ConversationWindow, input: &str) -> String {
    let history = window.render();
    let mut prompt = String::with_capacity(preamble.len() + history.len() + input.len() + 32);
    prompt.push_str(preamble);
    if !history.is_empty() {
        prompt.push_str(&history);
        prompt.push('\n');
    }
    prompt.push_str("Student: ");
    prompt.push_str(input);
    prompt.push('\n');
    prompt.push_str(TUTOR_NAME);
    prompt.push(':');
    prompt
}
