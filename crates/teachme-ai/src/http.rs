//! Transport helpers shared by the HTTP backends.

use std::time::Duration;

use tracing::warn;

use crate::AiError;

/// Stops the model from writing the student's side of the dialogue.
pub(crate) const STOP_SEQUENCE: &str = "\nStudent:";

/// Build the reqwest client used by a backend.
pub(crate) fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            warn!("failed to build HTTP client ({e}), falling back to defaults");
            reqwest::Client::new()
        })
}

/// Map a transport failure onto `AiError`.
pub(crate) fn transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}

/// Send a prepared request and decode its JSON body, mapping HTTP failures.
pub(crate) async fn send_json(request: reqwest::RequestBuilder) -> Result<serde_json::Value, AiError> {
    let response = request.send().await.map_err(transport_error)?;

    let status = response.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(AiError::RateLimited);
    }
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let text = text.chars().take(200).collect::<String>();
        return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
    }

    response
        .json()
        .await
        .map_err(|e| AiError::ParseError(e.to_string()))
}

/// Join a base URL and an API path without doubling slashes.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
