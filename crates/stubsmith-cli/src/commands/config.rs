//! `stubsmith config` inspects configuration values.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(
                &AppConfig::active_path(config_file.as_ref())
                    .display()
                    .to_string(),
            )?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `profiles.default.stubs_path`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let unknown = || CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    };

    let parts: Vec<&str> = key.split('.').collect();
    match parts.as_slice() {
        ["output", "no_color"] => Ok(config.output.no_color.to_string()),
        ["profiles", name, field] => {
            let profile = config.profiles.get(*name).ok_or_else(|| CliError::ProfileNotFound {
                key: (*name).to_owned(),
                available: config.profiles.keys().cloned().collect(),
            })?;
            match *field {
                "stubs_path" => Ok(profile.stubs_path.display().to_string()),
                "target_path" => Ok(profile.target_path.display().to_string()),
                "preserve_suffixes" => Ok(profile.preserve_suffixes.join(", ")),
                "declaration_keywords" => Ok(profile.declaration_keywords.join(", ")),
                _ => Err(unknown()),
            }
        }
        _ => Err(unknown()),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
