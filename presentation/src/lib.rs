//! Presentation layer for llmhive
//!
//! This crate contains CLI definitions and console output formatting.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, Switch};
pub use output::console::ConsoleFormatter;
