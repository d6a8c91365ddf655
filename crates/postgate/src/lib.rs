//! Library interface for the `postgate` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//!
//! # Documentation Generation
//!
//! The [`command()`] function returns the clap `Command` for generating man pages
//! and shell completions.

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Log filter (e.g., debug, postgate=trace)
    POSTGATE_LOG_PATH      Explicit log file path
    POSTGATE_LOG_DIR       Log directory
    POSTGATE_<KEY>         Override any top-level config key (e.g., POSTGATE_DEBOUNCE_MS=500)
";
/// Command-line interface definition for postgate.
#[derive(Parser)]
#[command(name = "postgate")]
#[command(about = "Screen topics, audiences and edit instructions before they reach a post generator", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Classify one input for a channel
    Check(commands::check::CheckArgs),

    /// Screen a topic and audience pair the way a generation request is screened
    Submit(commands::submit::SubmitArgs),

    /// Show the user-facing message for a verdict
    Describe(commands::describe::DescribeArgs),

    /// Score a finished post for engagement
    Score(commands::score::ScoreArgs),

    /// Show package information
    Info(commands::info::InfoArgs),

    /// Start MCP (Model Context Protocol) server on stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn check_parses_channel_and_text() {
        let cli = Cli::try_parse_from(["postgate", "check", "audience", "Startup Founders"]).unwrap();
        let Some(Commands::Check(args)) = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(args.channel, postgate_core::Channel::Audience);
        assert_eq!(args.text.as_deref(), Some("Startup Founders"));
    }

    #[test]
    fn channel_accepts_kebab_case() {
        let cli = Cli::try_parse_from(["postgate", "check", "edit-instruction", "shorten this"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Check(ref args)) if args.channel == postgate_core::Channel::EditInstruction
        ));
    }
}
