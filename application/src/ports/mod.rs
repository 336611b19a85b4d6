//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod change_logger;
pub mod settings_accessor;
pub mod settings_mirror;
