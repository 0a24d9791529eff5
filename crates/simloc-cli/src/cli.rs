//! Command line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Key-based localization from the command line
#[derive(Parser, Debug)]
#[command(name = "simloc", author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, env = "SIMLOC_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Log level, overriding the configuration
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Translate text containing `@{key}{arg}...` references
    Translate {
        /// Target language; the configured default when absent
        #[arg(short, long)]
        language: Option<String>,

        /// Text to translate; several words are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Resolve a single key
    Key {
        /// Target language; the configured default when absent
        #[arg(short, long)]
        language: Option<String>,

        /// The key to resolve
        key: String,

        /// Arguments substituted into the template
        args: Vec<String>,

        /// Text printed verbatim when the key has no translation
        #[arg(long, conflicts_with = "strict")]
        default: Option<String>,

        /// Fail when the key has no translation
        #[arg(long)]
        strict: bool,
    },

    /// Print the request parsed from TEXT as JSON
    Parse {
        /// Text to parse
        text: String,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// List the supported languages
    Languages,
}
