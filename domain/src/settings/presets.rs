//! Named presets: criteria equalizer presets and chat template presets.

use crate::core::error::DomainError;
use crate::settings::aggregate::{Criteria, OrchestratorSettings, SettingsPatch, apply_update};
use crate::settings::options::{
    AnswerFormat, DomainPack, EliteStrategy, ReasoningMode,
};
use crate::settings::selection::ReasoningSelection;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==================== Criteria presets ====================

/// Equalizer presets that set all three criteria axes at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriteriaPreset {
    Balanced,
    Fast,
    Precise,
    Creative,
}

impl CriteriaPreset {
    pub const ALL: [CriteriaPreset; 4] = [
        CriteriaPreset::Balanced,
        CriteriaPreset::Fast,
        CriteriaPreset::Precise,
        CriteriaPreset::Creative,
    ];

    pub fn criteria(&self) -> Criteria {
        match self {
            CriteriaPreset::Balanced => Criteria::new(70, 60, 50),
            CriteriaPreset::Fast => Criteria::new(50, 95, 40),
            CriteriaPreset::Precise => Criteria::new(95, 35, 30),
            CriteriaPreset::Creative => Criteria::new(60, 50, 95),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CriteriaPreset::Balanced => "Balanced",
            CriteriaPreset::Fast => "Fast",
            CriteriaPreset::Precise => "Precise",
            CriteriaPreset::Creative => "Creative",
        }
    }
}

impl fmt::Display for CriteriaPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

impl std::str::FromStr for CriteriaPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CriteriaPreset::ALL
            .into_iter()
            .find(|preset| preset.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid CriteriaPreset: {}", s))
    }
}

impl Criteria {
    /// The preset these values correspond to, if any
    pub fn matching_preset(&self) -> Option<CriteriaPreset> {
        CriteriaPreset::ALL
            .into_iter()
            .find(|preset| preset.criteria() == *self)
    }
}

/// Patch setting all three criteria axes from a preset
pub fn apply_criteria_preset(preset: CriteriaPreset) -> SettingsPatch {
    SettingsPatch {
        criteria: Some(preset.criteria()),
        ..Default::default()
    }
}

// ==================== Template presets ====================

/// A named starting point for a new chat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplatePreset {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub settings: SettingsPatch,
}

impl TemplatePreset {
    pub fn new(name: impl Into<String>, label: impl Into<String>, settings: SettingsPatch) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            description: String::new(),
            settings,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Settings for a chat started from this template: `defaults ⊕ preset`.
    ///
    /// The previous session's settings play no part.
    pub fn instantiate(&self, defaults: &OrchestratorSettings) -> OrchestratorSettings {
        apply_update(defaults, &self.settings)
    }
}

/// Templates shipped with the client
pub fn builtin_templates() -> Vec<TemplatePreset> {
    vec![
        TemplatePreset::new(
            "quick-answer",
            "Quick Answer",
            SettingsPatch {
                reasoning_mode: Some(ReasoningMode::Fast),
                accuracy_level: Some(2),
                criteria: Some(CriteriaPreset::Fast.criteria()),
                answer_format: Some(AnswerFormat::Concise),
                prefer_cheaper: Some(true),
                ..Default::default()
            },
        )
        .with_description("Short answers from fast, inexpensive models"),
        TemplatePreset::new(
            "deep-research",
            "Deep Research",
            SettingsPatch {
                reasoning_mode: Some(ReasoningMode::Deep),
                domain_pack: Some(DomainPack::Research),
                elite_strategy: Some(EliteStrategy::QualityWeightedFusion),
                accuracy_level: Some(5),
                criteria: Some(CriteriaPreset::Precise.criteria()),
                advanced_reasoning_methods: Some(ReasoningSelection::automatic()),
                output_validation: Some(true),
                answer_structure: Some(true),
                max_cost_usd: Some(3.0),
                ..Default::default()
            },
        )
        .with_description("Thorough, cited analysis across several models"),
        TemplatePreset::new(
            "code-assistant",
            "Code Assistant",
            SettingsPatch {
                domain_pack: Some(DomainPack::Coding),
                elite_strategy: Some(EliteStrategy::ChallengeAndRefine),
                answer_format: Some(AnswerFormat::StepByStep),
                prompt_optimization: Some(true),
                output_validation: Some(true),
                ..Default::default()
            },
        )
        .with_description("Code generation with a critic pass"),
        TemplatePreset::new(
            "medical-qa",
            "Medical Q&A",
            SettingsPatch {
                domain_pack: Some(DomainPack::Medical),
                reasoning_mode: Some(ReasoningMode::Deep),
                elite_strategy: Some(EliteStrategy::ExpertPanel),
                accuracy_level: Some(5),
                enable_clarification_questions: Some(true),
                ..Default::default()
            },
        )
        .with_description("Careful answers that ask before assuming"),
        TemplatePreset::new(
            "legal-review",
            "Legal Review",
            SettingsPatch {
                domain_pack: Some(DomainPack::Legal),
                elite_strategy: Some(EliteStrategy::ExpertPanel),
                answer_format: Some(AnswerFormat::Structured),
                answer_structure: Some(true),
                accuracy_level: Some(4),
                ..Default::default()
            },
        )
        .with_description("Structured review of contracts and clauses"),
        TemplatePreset::new(
            "creative-writing",
            "Creative Writing",
            SettingsPatch {
                domain_pack: Some(DomainPack::Marketing),
                criteria: Some(CriteriaPreset::Creative.criteria()),
                elite_strategy: Some(EliteStrategy::BestOfN),
                enable_spell_check: Some(true),
                enable_verification: Some(false),
                ..Default::default()
            },
        )
        .with_description("Several drafts, best one wins"),
    ]
}

/// Find a template by name among `templates`
pub fn find_template<'a>(
    templates: &'a [TemplatePreset],
    name: &str,
) -> Result<&'a TemplatePreset, DomainError> {
    templates
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| DomainError::UnknownTemplate(name.to_string()))
}
