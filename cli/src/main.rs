//! CLI entrypoint for llmhive
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use clap::Parser;
use hive_application::{
    ChatSubmission, SettingsAccessorPort, SettingsCommand, SettingsSession, SettingsValue,
};
use hive_domain::{CriteriaPreset, Engine, known_keys};
use hive_infrastructure::{ConfigLoader, FileConfig, FileSettingsMirror, JsonlChangeLogger};
use hive_presentation::{Cli, Command, ConsoleFormatter};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines reach the file
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting llmhive");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }
    for issue in config.validate() {
        warn!(code = ?issue.code, "config: {}", issue.message);
    }

    // === Dependency Injection ===
    let mut session = build_session(&config)?.start();

    let output = run(&mut session, cli.command_or_default())?;
    println!("{}", output);
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("--log-file must name a file: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

/// Wire the session to its configured adapters
fn build_session(config: &FileConfig) -> Result<SettingsSession> {
    let mut session = SettingsSession::new(config.to_session_config()?);

    if config.mirror.enabled {
        match config.mirror.resolved_path() {
            Some(path) => {
                info!(path = %path.display(), "Using settings mirror");
                session = session.with_mirror(Arc::new(FileSettingsMirror::new(path)));
            }
            None => warn!("No data directory available; settings will not be mirrored"),
        }
    }

    if let Some(path) = &config.logging.change_log
        && let Some(logger) = JsonlChangeLogger::new(path)
    {
        session = session.with_change_logger(Arc::new(logger));
    }

    Ok(session)
}

/// Execute one subcommand and return what to print
fn run(session: &mut SettingsSession, command: Command) -> Result<String> {
    let dispatched = match command {
        Command::Show { json: true } => return Ok(ConsoleFormatter::format_json(&session.settings())),
        Command::Show { json: false } => {
            let mut output = ConsoleFormatter::format_settings(&session.settings());
            let issues = session.validate();
            if !issues.is_empty() {
                output.push('\n');
                output.push_str(&ConsoleFormatter::format_issues(&issues));
            }
            return Ok(output);
        }
        Command::Get { key } => return Ok(session.settings_get(&key)?.to_string()),
        Command::Set { key, value } => {
            let issues = session.settings_set(&key, SettingsValue::parse(&value))?;
            let mut output = ConsoleFormatter::format_value(&key, &session.settings_get(&key)?);
            if !issues.is_empty() {
                output.push('\n');
                output.push_str(&ConsoleFormatter::format_issues(&issues));
            }
            return Ok(output);
        }
        Command::Keys => return Ok(ConsoleFormatter::format_keys(known_keys())),
        Command::Templates => return Ok(ConsoleFormatter::format_templates(session.templates())),
        Command::Payload {
            prompt,
            conversation_id,
        } => {
            let mut submission = ChatSubmission::new(prompt, &session.settings())?;
            if let Some(id) = conversation_id {
                submission = submission.with_conversation_id(id);
            }
            return Ok(serde_json::to_string_pretty(&submission.to_json()?)?);
        }
        Command::ToggleModel { id } => session.dispatch(SettingsCommand::ToggleModel(id)),
        Command::ToggleMethod { id } => {
            session.dispatch(SettingsCommand::ToggleReasoningMethod(id))
        }
        Command::ToggleFeature { id } => session.dispatch(SettingsCommand::ToggleFeature(id)),
        Command::Engine { engine, state } => session.dispatch(SettingsCommand::ToggleEngine {
            engine: engine.parse::<Engine>()?,
            enabled: state.is_on(),
        }),
        Command::EnginesAuto => session.dispatch(SettingsCommand::SelectAutomaticEngines),
        Command::Criteria { preset } => {
            let preset = preset.parse::<CriteriaPreset>().map_err(anyhow::Error::msg)?;
            session.dispatch(SettingsCommand::ApplyCriteriaPreset(preset))
        }
        Command::Template { name } => session.apply_template(&name)?,
        Command::NewChat => session.new_chat(),
    };

    Ok(ConsoleFormatter::format_outcome(&dispatched))
}
