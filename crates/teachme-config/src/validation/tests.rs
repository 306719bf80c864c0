//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = TeachMeConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_max_tokens() {
    let mut config = TeachMeConfig::default();
    config.model.max_tokens = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.max_tokens"));
}

#[test]
fn catches_timeout_too_large() {
    let mut config = TeachMeConfig::default();
    config.model.timeout_secs = 3600;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.timeout_secs"));
}

#[test]
fn catches_blank_model_name() {
    let mut config = TeachMeConfig::default();
    config.model.model = Some("   ".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.model must not be empty"));
}

#[test]
fn zero_window_pairs_is_allowed() {
    let mut config = TeachMeConfig::default();
    config.session.window_pairs = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_window_too_large() {
    let mut config = TeachMeConfig::default();
    config.session.window_pairs = 51;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.window_pairs"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = TeachMeConfig::default();
    config.model.max_tokens = 0;
    config.model.base_url = Some(String::new());
    config.session.window_pairs = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.max_tokens"));
    assert!(err.contains("model.base_url"));
    assert!(err.contains("session.window_pairs"));
    assert_eq!(err.matches("; ").count(), 2);
}
