//! The four backend reasoning engines and the rules for switching them.
//!
//! Any individual engine switch implies manual mode: toggling an engine while
//! `enginesMode` is `automatic` flips the mode to `manual` in the same patch.
//! Choosing "Automatic" clears all four switches.

use crate::core::error::DomainError;
use crate::settings::aggregate::{OrchestratorSettings, SettingsPatch};
use crate::settings::options::EnginesMode;
use std::fmt;

/// A backend reasoning engine with a client-side enable switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Engine {
    /// Hierarchical reasoning model
    Hrm,
    PromptDiffusion,
    DeepConsensus,
    AdaptiveEnsemble,
}

impl Engine {
    pub const ALL: [Engine; 4] = [
        Engine::Hrm,
        Engine::PromptDiffusion,
        Engine::DeepConsensus,
        Engine::AdaptiveEnsemble,
    ];

    /// Wire name of the boolean field controlling this engine
    pub fn key(&self) -> &'static str {
        match self {
            Engine::Hrm => "enableHRM",
            Engine::PromptDiffusion => "enablePromptDiffusion",
            Engine::DeepConsensus => "enableDeepConsensus",
            Engine::AdaptiveEnsemble => "enableAdaptiveEnsemble",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Engine::Hrm => "HRM",
            Engine::PromptDiffusion => "Prompt Diffusion",
            Engine::DeepConsensus => "Deep Consensus",
            Engine::AdaptiveEnsemble => "Adaptive Ensemble",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Engine::Hrm => "Hierarchical planner/executor decomposition",
            Engine::PromptDiffusion => "Iterative prompt refinement before answering",
            Engine::DeepConsensus => "Multi-round cross-model agreement",
            Engine::AdaptiveEnsemble => "Dynamic weighting of model contributions",
        }
    }

    /// Whether the engine's switch is on in `settings`
    pub fn is_enabled(&self, settings: &OrchestratorSettings) -> bool {
        match self {
            Engine::Hrm => settings.enable_hrm,
            Engine::PromptDiffusion => settings.enable_prompt_diffusion,
            Engine::DeepConsensus => settings.enable_deep_consensus,
            Engine::AdaptiveEnsemble => settings.enable_adaptive_ensemble,
        }
    }

    fn set(&self, patch: &mut SettingsPatch, enabled: bool) {
        match self {
            Engine::Hrm => patch.enable_hrm = Some(enabled),
            Engine::PromptDiffusion => patch.enable_prompt_diffusion = Some(enabled),
            Engine::DeepConsensus => patch.enable_deep_consensus = Some(enabled),
            Engine::AdaptiveEnsemble => patch.enable_adaptive_ensemble = Some(enabled),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Engine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.trim_start_matches("enable") {
            "hrm" => Ok(Engine::Hrm),
            "promptdiffusion" | "diffusion" => Ok(Engine::PromptDiffusion),
            "deepconsensus" | "consensus" => Ok(Engine::DeepConsensus),
            "adaptiveensemble" | "ensemble" => Ok(Engine::AdaptiveEnsemble),
            _ => Err(DomainError::UnknownEngine(s.to_string())),
        }
    }
}

/// Switch one engine on or off.
///
/// Includes `enginesMode = manual`, so flipping a switch while the backend
/// controls engines opts the user out of automatic mode. Returns an empty
/// patch when the switch is already in the requested state in manual mode.
pub fn toggle_engine(
    settings: &OrchestratorSettings,
    engine: Engine,
    enabled: bool,
) -> SettingsPatch {
    if settings.engines_mode.is_manual() && engine.is_enabled(settings) == enabled {
        return SettingsPatch::new();
    }
    let mut patch = SettingsPatch {
        engines_mode: Some(EnginesMode::Manual),
        ..Default::default()
    };
    engine.set(&mut patch, enabled);
    patch
}

/// Hand engine selection back to the backend: all four switches off.
pub fn select_automatic_engines() -> SettingsPatch {
    let mut patch = SettingsPatch {
        engines_mode: Some(EnginesMode::Automatic),
        ..Default::default()
    };
    for engine in Engine::ALL {
        engine.set(&mut patch, false);
    }
    patch
}

/// Switch the engines mode directly.
///
/// Entering manual mode keeps the stored switches; entering automatic mode
/// is [`select_automatic_engines`].
pub fn set_engines_mode(settings: &OrchestratorSettings, mode: EnginesMode) -> SettingsPatch {
    match mode {
        EnginesMode::Automatic => select_automatic_engines(),
        EnginesMode::Manual if settings.engines_mode.is_manual() => SettingsPatch::new(),
        EnginesMode::Manual => SettingsPatch {
            engines_mode: Some(EnginesMode::Manual),
            ..Default::default()
        },
    }
}
