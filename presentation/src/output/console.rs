//! Console output formatter for orchestrator settings

use colored::Colorize;
use hive_application::{DispatchOutcome, SettingsValue};
use hive_domain::{
    ConfigIssue, ConfigKeyInfo, Engine, ModelId, OrchestratorSettings, Severity, TemplatePreset,
    accuracy_label, active_engine_count, advanced_toggle_count, current_strategy_label,
    model_summary, reasoning_summary, strategy_info, ADVANCED_TOGGLE_KEYS,
};

/// Formats settings, keys and templates for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the settings summary shown by `llmhive show`
    pub fn format_settings(settings: &OrchestratorSettings) -> String {
        let shown = settings.clamped();
        let mut output = String::new();

        output.push_str(&Self::header("Orchestrator Settings"));
        output.push('\n');

        output.push_str(&Self::row(
            "Reasoning:",
            &format!("{} - {}", shown.reasoning_mode.label(), shown.reasoning_mode.description()),
        ));
        output.push_str(&Self::row("Domain:", shown.domain_pack.label()));
        output.push_str(&Self::row("Agents:", &shown.agent_mode.to_string()));
        output.push_str(&Self::row(
            "Accuracy:",
            &format!("{} ({}/5)", accuracy_label(shown.accuracy_level), shown.accuracy_level),
        ));
        output.push_str(&Self::row("Answer format:", shown.answer_format.label()));
        output.push_str(&Self::row("Max cost:", &format!("${:.2}", shown.max_cost_usd)));

        // Models
        output.push_str(&Self::section_header("Models"));
        output.push_str(&Self::row("Selection:", &model_summary(&shown.selected_models)));
        for model in shown.selected_models.picks() {
            output.push_str(&Self::model_line(model));
        }
        output.push_str(&Self::row("Methods:", &reasoning_summary(&shown)));
        for method in shown.advanced_reasoning_methods.methods() {
            output.push_str(&format!("  * {}\n", method));
        }

        // Strategy
        output.push_str(&Self::section_header("Strategy"));
        let strategy = strategy_info(&shown.elite_strategy);
        output.push_str(&Self::row("Elite:", current_strategy_label(&shown)));
        output.push_str(&format!("  {}\n", strategy.description.dimmed()));
        if !shown.elite_strategy.is_recognized() {
            output.push_str(&format!(
                "  {}\n",
                format!("(unrecognized: {})", shown.elite_strategy).yellow()
            ));
        }
        let preset = shown
            .criteria
            .matching_preset()
            .map(|p| p.label().to_string())
            .unwrap_or_else(|| "Custom".to_string());
        output.push_str(&Self::row(
            "Criteria:",
            &format!(
                "{} (accuracy {}, speed {}, creativity {})",
                preset, shown.criteria.accuracy, shown.criteria.speed, shown.criteria.creativity
            ),
        ));
        output.push_str(&Self::row(
            "Refinement:",
            &format!(
                "{} (max {} iterations)",
                Self::on_off(shown.orchestration_overrides.enable_refinement),
                shown.orchestration_overrides.max_iterations
            ),
        ));
        output.push_str(&Self::row("Verification:", &Self::on_off(shown.enable_verification)));
        output.push_str(&Self::row("Prefer cheaper:", &Self::on_off(shown.prefer_cheaper)));

        // Engines
        output.push_str(&Self::section_header("Engines"));
        if shown.engines_mode.is_manual() {
            output.push_str(&Self::row(
                "Mode:",
                &format!("Manual ({} active)", active_engine_count(&shown)),
            ));
            for engine in Engine::ALL {
                output.push_str(&Self::engine_line(engine, engine.is_enabled(&shown)));
            }
        } else {
            output.push_str(&Self::row("Mode:", "Automatic"));
        }

        // Advanced
        output.push_str(&Self::section_header("Advanced"));
        output.push_str(&Self::row(
            "Toggles:",
            &format!("{}/{} on", advanced_toggle_count(&shown), ADVANCED_TOGGLE_KEYS.len()),
        ));
        for key in ADVANCED_TOGGLE_KEYS {
            if shown.flag(key) == Some(true) {
                output.push_str(&format!("  * {}\n", key));
            }
        }
        if !shown.advanced_features.is_empty() {
            let features: Vec<&str> = shown.advanced_features.iter().map(String::as_str).collect();
            output.push_str(&Self::row("Features:", &features.join(", ")));
        }
        if !shown.extra.is_empty() {
            let keys: Vec<&str> = shown.extra.keys().map(String::as_str).collect();
            output.push_str(&Self::row("Other keys:", &keys.join(", ")));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(settings: &OrchestratorSettings) -> String {
        serde_json::to_string_pretty(settings).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a single key's value
    pub fn format_value(key: &str, value: &SettingsValue) -> String {
        format!("{} = {}", key.cyan(), value)
    }

    /// Format the key registry listing
    pub fn format_keys(keys: &[ConfigKeyInfo]) -> String {
        let width = keys.iter().map(|k| k.key.len()).max().unwrap_or(0);
        let mut output = String::new();
        for info in keys {
            output.push_str(&format!(
                "{}  {}",
                format!("{:width$}", info.key).cyan(),
                info.description
            ));
            if !info.valid_values.is_empty() {
                output.push_str(&format!(" {}", format!("[{}]", info.valid_values.join("|")).dimmed()));
            }
            output.push('\n');
        }
        output
    }

    /// Format the template listing
    pub fn format_templates(templates: &[TemplatePreset]) -> String {
        let mut output = format!("{}\n", "Templates:".cyan().bold());
        for template in templates {
            output.push_str(&format!("  {} {}\n", template.name.bold(), template.label));
            if !template.description.is_empty() {
                output.push_str(&format!("      {}\n", template.description.dimmed()));
            }
        }
        output
    }

    /// Format validation issues, one per line
    pub fn format_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}", "error:".red().bold(), issue.message),
                Severity::Warning => format!("{} {}", "warning:".yellow().bold(), issue.message),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format the keys a command changed
    pub fn format_outcome(outcome: &DispatchOutcome) -> String {
        if outcome.changed() {
            format!("{} {}", "Updated:".green().bold(), outcome.changed_keys.join(", "))
        } else {
            format!("{}", "No change".dimmed())
        }
    }

    fn model_line(model: &ModelId) -> String {
        format!("  * {} {}\n", model, format!("({})", model.family().label()).dimmed())
    }

    fn engine_line(engine: Engine, enabled: bool) -> String {
        let mark = if enabled { "[x]".green() } else { "[ ]".normal() };
        format!("  {} {} {}\n", mark, engine.label(), engine.description().dimmed())
    }

    fn on_off(value: bool) -> String {
        if value { "on".to_string() } else { "off".to_string() }
    }

    fn row(label: &str, value: &str) -> String {
        format!("{} {}\n", format!("{:<15}", label).cyan().bold(), value)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
