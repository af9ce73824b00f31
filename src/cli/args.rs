//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Check locale files for untranslated values
//! - `explain`: Show how a single source/target pair is judged
//! - `init`: Initialize samecheck configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::format::FormatFlag;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Explain(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Reject flags that cannot appear in a comma-separated flag list.
fn parse_flag(value: &str) -> Result<String, String> {
    let flag = value.trim();
    if flag.is_empty() {
        return Err("flag must not be empty".to_string());
    }
    if flag.contains(',') || flag.contains(char::is_whitespace) {
        return Err(format!(
            "invalid flag '{}': pass each flag separately, e.g. --flag c-format --flag fuzzy",
            flag
        ));
    }
    if FormatFlag::is_unknown_format(flag) {
        return Err(format!(
            "unknown format flag '{}': expected one of python-format, php-format, c-format",
            flag
        ));
    }
    Ok(flag.to_string())
}

/// Common arguments for commands that read locale files.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Primary locale (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Flag applied to every message, e.g. python-format (repeatable)
    #[arg(long = "flag", value_name = "FLAG", value_parser = parse_flag)]
    pub flags: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExplainCommand {
    /// Source string
    pub source: String,

    /// Translated string (defaults to the source string)
    #[arg(long)]
    pub target: Option<String>,

    /// Language code of the translation
    #[arg(short, long, default_value = "und")]
    pub language: String,

    /// Unit flag, e.g. c-format (repeatable)
    #[arg(long = "flag", value_name = "FLAG", value_parser = parse_flag)]
    pub flags: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check locale files for values identical to the primary locale
    Check(CheckCommand),
    /// Show how a single source/target pair is judged
    Explain(ExplainCommand),
    /// Initialize a new .samecheckrc.json configuration file
    Init,
}
