//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Cross-validate translation usage against every locale catalog
//! - `clean`: Report unused catalog entries, and delete them with `--remove`
//! - `init`: Initialize a transcheck configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Default locale (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Project root directory; the config file is searched from here
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Locale to check, repeatable (overrides config file)
    #[arg(long = "locale", value_name = "LOCALE")]
    pub locales: Vec<String>,

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
pub struct CleanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually delete unused entries (default is dry-run)
    #[arg(long)]
    pub remove: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that every used namespace and key exists in every locale
    Check(CheckCommand),
    /// Find translation entries no source file uses
    Clean(CleanCommand),
    /// Initialize a new .transcheckrc.json configuration file
    Init,
}
