//! Application-level configuration.
//!
//! - [`SessionConfig`]: defaults, template catalogue and mirror policy a
//!   settings session starts from

pub mod session_config;

pub use session_config::{DEFAULT_MIRROR_KEYS, SessionConfig};
