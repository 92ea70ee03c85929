//! `archreport config`: read configuration values.

use serde_json::Value;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&serde_json::json!({ "key": key, "value": value }))?;
            } else {
                output.print(&format!("{key} = {}", render(&value)))?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised = toml::to_string_pretty(&config)
                    .with_cli_context(|| "Failed to serialise config")?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `studio.drop_policy`.
///
/// Keys resolve against the serialised config, so every field is reachable
/// without a hand-written table. Unset optional values resolve to `null`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<Value> {
    let root = serde_json::to_value(config).map_err(|e| CliError::Serialization {
        message: "failed to encode configuration".into(),
        source: e,
    })?;

    let (section, field) = key.split_once('.').ok_or_else(|| unknown_key(key))?;
    let table = root
        .get(section)
        .and_then(Value::as_object)
        .ok_or_else(|| unknown_key(key))?;

    match table.get(field) {
        Some(value) => Ok(value.clone()),
        None if optional_keys().contains(&key) => Ok(Value::Null),
        None => Err(unknown_key(key)),
    }
}

fn optional_keys() -> &'static [&'static str] {
    &["bookmarks.path", "studio.catalog", "logging.file"]
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "(unset)".into(),
        other => other.to_string(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
