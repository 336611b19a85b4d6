//! Settings store: the single owner of the live settings aggregate.
//!
//! - [`SettingsCommand`]: every way a UI surface can ask for a change
//! - [`SettingsStore`]: applies commands and publishes snapshots

mod command;
mod settings_store;

pub use command::SettingsCommand;
pub use settings_store::{DispatchOutcome, SettingsStore};
