//! Single-valued option types of the orchestrator settings.
//!
//! Every enum here serializes to the identifier the chat backend expects
//! (`"standard"`, `"real_estate"`, `"best_of_n"`, `"bullet-points"`, ...).
//! [`DomainPack`] and [`EliteStrategy`] keep identifiers they do not know,
//! so settings written by a newer client survive a round trip.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ==================== ReasoningMode ====================

/// Depth of reasoning the backend spends on a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningMode {
    Fast,
    #[default]
    Standard,
    Deep,
}

impl ReasoningMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasoningMode::Fast => "fast",
            ReasoningMode::Standard => "standard",
            ReasoningMode::Deep => "deep",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReasoningMode::Fast => "Fast",
            ReasoningMode::Standard => "Standard",
            ReasoningMode::Deep => "Deep",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReasoningMode::Fast => "Quick answers with minimal deliberation",
            ReasoningMode::Standard => "Balanced reasoning for everyday questions",
            ReasoningMode::Deep => "Extended multi-step reasoning for hard problems",
        }
    }
}

impl fmt::Display for ReasoningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReasoningMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fast" => Ok(ReasoningMode::Fast),
            "standard" => Ok(ReasoningMode::Standard),
            "deep" => Ok(ReasoningMode::Deep),
            _ => Err(format!("Invalid ReasoningMode: {}", s)),
        }
    }
}

// ==================== DomainPack ====================

/// Backend prompt/behavior profile for a subject area.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DomainPack {
    #[default]
    Default,
    Medical,
    Legal,
    Marketing,
    Coding,
    Research,
    Finance,
    Education,
    RealEstate,
    /// A pack this client does not know by name
    Custom(String),
}

impl DomainPack {
    /// Packs this client knows by name, in picker order
    pub const KNOWN: [DomainPack; 9] = [
        DomainPack::Default,
        DomainPack::Medical,
        DomainPack::Legal,
        DomainPack::Marketing,
        DomainPack::Coding,
        DomainPack::Research,
        DomainPack::Finance,
        DomainPack::Education,
        DomainPack::RealEstate,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            DomainPack::Default => "default",
            DomainPack::Medical => "medical",
            DomainPack::Legal => "legal",
            DomainPack::Marketing => "marketing",
            DomainPack::Coding => "coding",
            DomainPack::Research => "research",
            DomainPack::Finance => "finance",
            DomainPack::Education => "education",
            DomainPack::RealEstate => "real_estate",
            DomainPack::Custom(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DomainPack::Default => "General",
            DomainPack::Medical => "Medical",
            DomainPack::Legal => "Legal",
            DomainPack::Marketing => "Marketing",
            DomainPack::Coding => "Coding",
            DomainPack::Research => "Research",
            DomainPack::Finance => "Finance",
            DomainPack::Education => "Education",
            DomainPack::RealEstate => "Real Estate",
            DomainPack::Custom(s) => s,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, DomainPack::Custom(_))
    }
}

impl fmt::Display for DomainPack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DomainPack {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Ok(match key.to_lowercase().replace('-', "_").as_str() {
            "default" | "general" => DomainPack::Default,
            "medical" => DomainPack::Medical,
            "legal" => DomainPack::Legal,
            "marketing" => DomainPack::Marketing,
            "coding" => DomainPack::Coding,
            "research" => DomainPack::Research,
            "finance" => DomainPack::Finance,
            "education" => DomainPack::Education,
            "real_estate" => DomainPack::RealEstate,
            _ => DomainPack::Custom(key.to_string()),
        })
    }
}

impl Serialize for DomainPack {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DomainPack {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(pack) = s.parse::<DomainPack>();
        Ok(pack)
    }
}

// ==================== AgentMode ====================

/// Whether one agent or a team of agents answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentMode {
    #[default]
    Single,
    Team,
}

impl AgentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentMode::Single => "single",
            AgentMode::Team => "team",
        }
    }

    pub fn is_team(&self) -> bool {
        matches!(self, AgentMode::Team)
    }
}

impl fmt::Display for AgentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AgentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(AgentMode::Single),
            "team" => Ok(AgentMode::Team),
            _ => Err(format!("Invalid AgentMode: {}", s)),
        }
    }
}

// ==================== EnginesMode ====================

/// Who controls the four reasoning engines.
///
/// In `Automatic` mode the backend picks engines and the individual
/// switches are disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnginesMode {
    #[default]
    Automatic,
    Manual,
}

impl EnginesMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnginesMode::Automatic => "automatic",
            EnginesMode::Manual => "manual",
        }
    }

    pub fn is_manual(&self) -> bool {
        matches!(self, EnginesMode::Manual)
    }
}

impl fmt::Display for EnginesMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EnginesMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "automatic" | "auto" => Ok(EnginesMode::Automatic),
            "manual" => Ok(EnginesMode::Manual),
            _ => Err(format!("Invalid EnginesMode: {}", s)),
        }
    }
}

// ==================== EliteStrategy ====================

/// Top-level response-generation strategy executed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum EliteStrategy {
    #[default]
    Automatic,
    SingleBest,
    ParallelRace,
    BestOfN,
    QualityWeightedFusion,
    ExpertPanel,
    ChallengeAndRefine,
    /// A strategy identifier this client does not recognize
    Other(String),
}

impl EliteStrategy {
    pub fn as_str(&self) -> &str {
        match self {
            EliteStrategy::Automatic => "automatic",
            EliteStrategy::SingleBest => "single_best",
            EliteStrategy::ParallelRace => "parallel_race",
            EliteStrategy::BestOfN => "best_of_n",
            EliteStrategy::QualityWeightedFusion => "quality_weighted_fusion",
            EliteStrategy::ExpertPanel => "expert_panel",
            EliteStrategy::ChallengeAndRefine => "challenge_and_refine",
            EliteStrategy::Other(s) => s,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, EliteStrategy::Other(_))
    }
}

impl fmt::Display for EliteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EliteStrategy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Ok(match key.to_lowercase().replace('-', "_").as_str() {
            "automatic" | "auto" => EliteStrategy::Automatic,
            "single_best" => EliteStrategy::SingleBest,
            "parallel_race" => EliteStrategy::ParallelRace,
            "best_of_n" => EliteStrategy::BestOfN,
            "quality_weighted_fusion" => EliteStrategy::QualityWeightedFusion,
            "expert_panel" => EliteStrategy::ExpertPanel,
            "challenge_and_refine" => EliteStrategy::ChallengeAndRefine,
            _ => EliteStrategy::Other(key.to_string()),
        })
    }
}

impl Serialize for EliteStrategy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EliteStrategy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(strategy) = s.parse::<EliteStrategy>();
        Ok(strategy)
    }
}

// ==================== AnswerFormat ====================

/// Shape the final answer should take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerFormat {
    #[default]
    Automatic,
    Default,
    Structured,
    BulletPoints,
    StepByStep,
    Academic,
    Concise,
}

impl AnswerFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerFormat::Automatic => "automatic",
            AnswerFormat::Default => "default",
            AnswerFormat::Structured => "structured",
            AnswerFormat::BulletPoints => "bullet-points",
            AnswerFormat::StepByStep => "step-by-step",
            AnswerFormat::Academic => "academic",
            AnswerFormat::Concise => "concise",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnswerFormat::Automatic => "Automatic",
            AnswerFormat::Default => "Default",
            AnswerFormat::Structured => "Structured",
            AnswerFormat::BulletPoints => "Bullet Points",
            AnswerFormat::StepByStep => "Step by Step",
            AnswerFormat::Academic => "Academic",
            AnswerFormat::Concise => "Concise",
        }
    }
}

impl fmt::Display for AnswerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AnswerFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "automatic" | "auto" => Ok(AnswerFormat::Automatic),
            "default" => Ok(AnswerFormat::Default),
            "structured" => Ok(AnswerFormat::Structured),
            "bullet-points" | "bullets" => Ok(AnswerFormat::BulletPoints),
            "step-by-step" => Ok(AnswerFormat::StepByStep),
            "academic" => Ok(AnswerFormat::Academic),
            "concise" => Ok(AnswerFormat::Concise),
            _ => Err(format!("Invalid AnswerFormat: {}", s)),
        }
    }
}

// ==================== ReasoningMethod ====================

/// Identifier of an advanced reasoning method (`chain-of-thought`,
/// `tree-of-thought`, `self-consistency`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReasoningMethod(String);

impl ReasoningMethod {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReasoningMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ReasoningMethod {
    fn from(s: &str) -> Self {
        ReasoningMethod::new(s)
    }
}

impl From<String> for ReasoningMethod {
    fn from(s: String) -> Self {
        ReasoningMethod::new(s)
    }
}

impl AsRef<str> for ReasoningMethod {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
