//! Domain layer for llmhive
//!
//! This crate contains the orchestrator settings model and the rules that
//! keep it consistent. It has no dependencies on infrastructure or
//! presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Orchestrator Settings
//!
//! One aggregate ([`OrchestratorSettings`]) per chat session, changed only by
//! merging a [`SettingsPatch`] with [`apply_update`]:
//!
//! - **Scalar keys** (modes, toggles, numbers) are replaced directly
//! - **Collection keys** (models, reasoning methods, features, nested
//!   records) are replaced whole with a value computed from the current one
//!
//! ## Automatic sentinel
//!
//! Model and reasoning-method pickers are either `Automatic` (the backend
//! chooses) or an explicit non-empty set, never both. See [`Selection`].

pub mod config;
pub mod core;
pub mod settings;

// Re-export commonly used types
pub use config::{ConfigKeyInfo, UpdateKind, known_keys, lookup_key, parse_assignment, read_key};
pub use core::{
    error::DomainError,
    model::{ModelFamily, ModelId},
};
pub use settings::{
    aggregate::{
        Criteria, FIELD_NAMES, OrchestrationOverrides, OrchestratorSettings, SettingsPatch,
        apply_update,
    },
    engines::{Engine, select_automatic_engines, set_engines_mode, toggle_engine},
    options::{
        AgentMode, AnswerFormat, DomainPack, EliteStrategy, EnginesMode, ReasoningMethod,
        ReasoningMode,
    },
    presets::{CriteriaPreset, TemplatePreset, apply_criteria_preset, builtin_templates, find_template},
    selection::{
        AUTOMATIC, FeatureSet, ModelSelection, Picks, ReasoningSelection, Selection,
        toggle_feature, toggle_model, toggle_reasoning_method,
    },
    validation::{ConfigIssue, ConfigIssueCode, Severity, has_errors, validate},
    views::{
        ADVANCED_TOGGLE_KEYS, STRATEGIES, StrategyInfo, accuracy_label, active_engine_count,
        advanced_toggle_count, count_enabled_toggles, current_strategy_label, model_summary,
        reasoning_summary, strategy_info,
    },
};
