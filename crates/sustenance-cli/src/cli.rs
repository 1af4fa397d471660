//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the sust CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// sust - search UCSC dining-hall menus
#[derive(Parser, Debug)]
#[command(name = "sust")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of the text report
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Corpus file to read (default: from config, then the cache directory)
    #[arg(long, global = true, env = "SUST_CORPUS")]
    pub corpus: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fuzzy search across location, course, bar, food and dietary tags
    #[command(alias = "s")]
    Search {
        /// Food name token (repeatable)
        #[arg(short, long, action = clap::ArgAction::Append)]
        food: Vec<String>,

        /// Location token, e.g. "nine" or "porter" (repeatable)
        #[arg(short, long, action = clap::ArgAction::Append)]
        location: Vec<String>,

        /// Course token, e.g. "dinner" or "night" (repeatable)
        #[arg(short, long, action = clap::ArgAction::Append)]
        course: Vec<String>,

        /// Bar token, e.g. "taco" (repeatable)
        #[arg(short, long, action = clap::ArgAction::Append)]
        group: Vec<String>,

        /// Exclude items carrying this dietary tag, e.g. "nuts" (repeatable)
        #[arg(short = 'x', long, action = clap::ArgAction::Append)]
        exclude: Vec<String>,
    },

    /// Literal substring search on item names
    #[command(alias = "f")]
    Find {
        /// Substrings to look for (case-insensitive)
        #[arg(required = true)]
        terms: Vec<String>,
    },

    /// Group a scraped menu dump and store it as the corpus
    Ingest {
        /// Scraped JSON file (array of locations with flagged bar headers)
        file: PathBuf,
    },

    /// List the known dining locations
    Locations,

    /// View or edit configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration (default)
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}
