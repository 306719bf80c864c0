//! Configuration schema types for teachme.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the same defaults the tutor uses when
//! no config file exists.

mod model;
mod session;
mod system;

pub use model::*;
pub use session::*;
pub use system::*;

pub use teachme_common::StudentProfile;

use serde::{Deserialize, Serialize};

/// Root configuration for teachme.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TeachMeConfig {
    pub student: StudentProfile,
    pub model: ModelConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}
