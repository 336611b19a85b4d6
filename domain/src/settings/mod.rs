//! Orchestrator settings: schema, merge rule, selection rules, derived views.
//!
//! - [`aggregate`]: [`OrchestratorSettings`](aggregate::OrchestratorSettings),
//!   [`SettingsPatch`](aggregate::SettingsPatch) and [`apply_update`](aggregate::apply_update)
//! - [`selection`]: automatic-sentinel pickers (models, reasoning methods) and features
//! - [`engines`]: engine switches and the automatic/manual rule
//! - [`views`]: badge counts and labels
//! - [`presets`]: criteria and template presets
//! - [`validation`]: range checks

pub mod aggregate;
pub mod engines;
pub mod options;
pub mod presets;
pub mod selection;
pub mod validation;
pub mod views;
