pub mod errors;
pub mod id;
pub mod profile;

pub use errors::{ConfigError, TeachMeError};
pub use id::SessionId;
pub use profile::StudentProfile;

pub type Result<T> = std::result::Result<T, TeachMeError>;
