//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// On/off switch for engine toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub fn is_on(self) -> bool {
        self == Switch::On
    }
}

/// CLI arguments for llmhive
#[derive(Parser, Debug)]
#[command(name = "llmhive")]
#[command(author, version, about = "Inspect and edit LLMHive orchestrator settings")]
#[command(long_about = r#"
llmhive manages the orchestrator settings sent with every LLMHive chat
request: reasoning depth, model picks, engines, strategy, accuracy and cost.

Each run starts from the configured defaults, restores the mirrored keys
from the last run, applies one command and mirrors the result.

Configuration files are loaded from (in priority order):
1. LLMHIVE_* environment variables (LLMHIVE_SESSION__REASONINGMODE=deep)
2. --config <path>                 Explicit config file
3. ./llmhive.toml                  Project-level config
4. ~/.config/llmhive/config.toml   Global config

Example:
  llmhive show
  llmhive toggle-model gpt-5
  llmhive set accuracyLevel 4
  llmhive engine hrm on
  llmhive template deep-research
  llmhive payload "Summarize the attached contract"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the current settings (default)
    Show {
        /// Print the settings as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one settings key
    Get {
        /// Wire name, dotted for nested members (criteria.speed)
        key: String,
    },
    /// Set one settings key
    Set { key: String, value: String },
    /// List every settings key
    Keys,
    /// Toggle a model in the model picker ("automatic" resets it)
    ToggleModel {
        #[arg(value_name = "MODEL")]
        id: String,
    },
    /// Toggle an advanced reasoning method
    ToggleMethod {
        #[arg(value_name = "METHOD")]
        id: String,
    },
    /// Toggle an advanced feature
    ToggleFeature {
        #[arg(value_name = "FEATURE")]
        id: String,
    },
    /// Switch an engine on or off (implies manual engines mode)
    Engine {
        /// hrm, prompt-diffusion, deep-consensus or adaptive-ensemble
        engine: String,
        #[arg(value_enum)]
        state: Switch,
    },
    /// Let the backend pick engines
    EnginesAuto,
    /// Apply a criteria preset (balanced, fast, precise, creative)
    Criteria { preset: String },
    /// List template presets
    Templates,
    /// Start over from a template preset
    Template { name: String },
    /// Start over from the defaults
    NewChat,
    /// Print the chat request body for a prompt
    Payload {
        prompt: String,
        /// Attach to an existing conversation
        #[arg(long, value_name = "ID")]
        conversation_id: Option<String>,
    },
}

impl Cli {
    /// Subcommand to run; `show` when none was given
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Show { json: false })
    }
}
