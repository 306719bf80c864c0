//! Validation for the model and session sections.

use crate::schema::TeachMeConfig;

use super::helpers::{validate_not_blank, validate_range};

/// Validate model and transport constraints.
pub(crate) fn validate_model(errors: &mut Vec<String>, config: &TeachMeConfig) {
    let model = &config.model;
    validate_range(errors, "model.max_tokens", model.max_tokens.into(), 1, 8192);
    validate_range(errors, "model.timeout_secs", model.timeout_secs, 1, 600);
    validate_not_blank(errors, "model.model", model.model.as_deref());
    validate_not_blank(errors, "model.base_url", model.base_url.as_deref());
}

/// Validate conversation window constraints.
pub(crate) fn validate_session(errors: &mut Vec<String>, config: &TeachMeConfig) {
    validate_range(
        errors,
        "session.window_pairs",
        config.session.window_pairs as u64,
        0,
        50,
    );
}
