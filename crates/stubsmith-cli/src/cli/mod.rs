//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

/// Profile used when `--stub-id` is not given.
pub const DEFAULT_PROFILE: &str = "default";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stubsmith",
    bin_name = "stubsmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate code from stub templates",
    long_about = "stubsmith copies a directory of stub files into your project, \
                  renaming each file and its first class declaration after NAME \
                  while keeping configured suffixes such as Controller or Service.",
    after_help = "EXAMPLES:\n\
        \x20 stubsmith generate User\n\
        \x20 stubsmith generate Invoice --stub-id api --target app/Billing\n\
        \x20 stubsmith generate User --force\n\
        \x20 stubsmith profiles",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate files from a stub profile.
    #[command(
        visible_aliases = ["gen", "g"],
        about = "Generate code from stubs",
        after_help = "EXAMPLES:\n\
            \x20 stubsmith generate User\n\
            \x20 stubsmith generate User --stub-id api\n\
            \x20 stubsmith generate User --target src/Domain --force\n\
            \x20 stubsmith generate User --dry-run"
    )]
    Generate(GenerateArgs),

    /// List configured stub profiles.
    #[command(
        visible_alias = "ls",
        about = "List stub profiles",
        after_help = "EXAMPLES:\n\
            \x20 stubsmith profiles\n\
            \x20 stubsmith profiles --format json"
    )]
    Profiles(ProfilesArgs),

    /// Initialise a stubsmith configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stubsmith init           # user config directory\n\
            \x20 stubsmith init --local   # .stubsmith.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stubsmith completions bash > ~/.local/share/bash-completion/completions/stubsmith\n\
            \x20 stubsmith completions zsh  > ~/.zfunc/_stubsmith\n\
            \x20 stubsmith completions fish > ~/.config/fish/completions/stubsmith.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the stubsmith configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stubsmith config get profiles.default.stubs_path\n\
            \x20 stubsmith config list\n\
            \x20 stubsmith config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `stubsmith generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Base name substituted into file names and the first declaration.
    #[arg(value_name = "NAME", help = "The name of the generated component")]
    pub name: String,

    /// Profile key selecting stubs path, target path and suffixes.
    #[arg(
        short = 's',
        long = "stub-id",
        visible_alias = "stub_id",
        value_name = "KEY",
        default_value = DEFAULT_PROFILE,
        help = "The stub profile in config"
    )]
    pub stub_id: String,

    /// Override the profile's target directory.
    #[arg(
        short = 't',
        long = "target",
        value_name = "DIR",
        help = "The target directory"
    )]
    pub target: Option<PathBuf>,

    /// Overwrite existing files instead of aborting.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Preview what would be written without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,
}

// ── profiles ──────────────────────────────────────────────────────────────────

/// Arguments for `stubsmith profiles`.
#[derive(Debug, Args)]
pub struct ProfilesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `profiles` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One key per line.
    List,
    /// JSON object keyed by profile.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stubsmith init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.stubsmith.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stubsmith completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stubsmith config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `profiles.default.stubs_path`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_defaults() {
        let cli = Cli::parse_from(["stubsmith", "generate", "User"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.name, "User");
        assert_eq!(args.stub_id, DEFAULT_PROFILE);
        assert_eq!(args.target, None);
        assert!(!args.force);
        assert!(!args.dry_run);
    }

    #[test]
    fn parse_generate_all_flags() {
        let cli = Cli::parse_from([
            "stubsmith",
            "g",
            "Invoice",
            "--stub-id",
            "api",
            "--target",
            "app/Billing",
            "-f",
            "--dry-run",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.stub_id, "api");
        assert_eq!(args.target, Some(PathBuf::from("app/Billing")));
        assert!(args.force);
        assert!(args.dry_run);
    }

    #[test]
    fn stub_id_underscore_alias() {
        let cli = Cli::parse_from(["stubsmith", "generate", "User", "--stub_id", "key"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.stub_id, "key");
    }

    #[test]
    fn generate_requires_name() {
        assert!(Cli::try_parse_from(["stubsmith", "generate"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["stubsmith", "--quiet", "--verbose", "profiles"]);
        assert!(result.is_err());
    }

    #[test]
    fn output_format_defaults_to_auto() {
        let cli = Cli::parse_from(["stubsmith", "profiles"]);
        assert_eq!(cli.global.output_format, global::OutputFormat::Auto);

        let cli = Cli::parse_from(["stubsmith", "profiles", "--output-format", "json"]);
        assert_eq!(cli.global.output_format, global::OutputFormat::Json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["stubsmith", "generate", "User", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }
}
