//! Flags shared by every `stubsmith` subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so
//! `stubsmith generate User -vv` and `stubsmith -vv generate User` mean the
//! same thing.

use clap::{ArgAction, Args, ValueEnum};
use std::path::PathBuf;

/// Logging, colour, config-file and output-format switches.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log level for the generator: warnings by default, then INFO, DEBUG and
    /// TRACE for each extra `-v`.  `RUST_LOG` overrides it.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Log more (-v run summary, -vv every written file, -vvv trace)"
    )]
    pub verbose: u8,

    /// Print nothing but errors.  JSON output is still written.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only report errors"
    )]
    pub quiet: bool,

    /// Plain markers instead of coloured ones; also set by `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Never colour messages"
    )]
    pub no_color: bool,

    /// Read stub profiles from this TOML file only.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Profile file to use instead of the user and project configs"
    )]
    pub config: Option<PathBuf>,

    /// How results are printed to stdout.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How to print results"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured markers and dimmed file lists.
    Human,
    /// Same lines without ANSI codes.
    Plain,
    /// One JSON document, e.g. the list of generated files.
    Json,
}
