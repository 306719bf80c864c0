use teachme_ai::AiError;
use teachme_common::TeachMeError;

#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    /// The completion backend could not produce a reply. Not retried.
    #[error("completion unavailable: {0}")]
    CompletionUnavailable(#[from] AiError),
}

impl From<TutorError> for TeachMeError {
    fn from(err: TutorError) -> Self {
        TeachMeError::Completion(err.to_string())
    }
}
