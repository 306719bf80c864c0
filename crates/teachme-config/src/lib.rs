//! teachme configuration system.
//!
//! TOML-based configuration for the student profile, the completion
//! backend, the conversation window, and logging. All sections use
//! defaults so partial configs work out of the box.
//!
//! ```rust,no_run
//! use teachme_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("tutoring {}", config.student.name());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LogLevel, LoggingConfig, ModelConfig, Provider, SessionConfig, TeachMeConfig};

use std::path::Path;

use teachme_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// An explicit path must exist; the default path is created from the
/// commented template on first run.
pub fn load_config(path: Option<&Path>) -> Result<TeachMeConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}
