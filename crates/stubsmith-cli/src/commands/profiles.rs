//! Implementation of the `stubsmith profiles` command.

use crate::{
    cli::{ListFormat, ProfilesArgs},
    config::{AppConfig, ProfileConfig},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ProfilesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match args.format {
        ListFormat::Table => {
            output.header("Stub profiles:")?;
            for (key, profile) in &config.profiles {
                output.print(&describe(key, profile))?;
            }
        }

        // JSON is machine output and bypasses quiet mode.
        ListFormat::Json => output.json(&config.profiles)?,

        ListFormat::List => {
            for key in config.profiles.keys() {
                output.print(key)?;
            }
        }
    }

    Ok(())
}

fn describe(key: &str, profile: &ProfileConfig) -> String {
    let suffixes = if profile.preserve_suffixes.is_empty() {
        "(none)".to_owned()
    } else {
        profile.preserve_suffixes.join(", ")
    };
    format!(
        "  {key}: {} -> {} [suffixes: {suffixes}]",
        profile.stubs_path.display(),
        profile.target_path.display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_shows_paths_and_suffixes() {
        let line = describe("default", &ProfileConfig::default());
        assert_eq!(line, "  default: stubs -> . [suffixes: Controller, Service]");
    }

    #[test]
    fn describe_marks_empty_suffixes() {
        let profile = ProfileConfig {
            preserve_suffixes: vec![],
            ..ProfileConfig::default()
        };
        assert!(describe("bare", &profile).ends_with("[suffixes: (none)]"));
    }
}
