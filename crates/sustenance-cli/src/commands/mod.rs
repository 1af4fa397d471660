//! Command implementations for the sust CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod completions;
pub mod config;
pub mod find;
pub mod ingest;
pub mod locations;
pub mod search;

use std::env;
use std::path::PathBuf;

use sustenance_menu::{Corpus, CorpusStore};
use sustenance_query::{AlignmentCosts, Matcher, QueryEngine};

use crate::cli::Cli;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Scraped input failed validation.
    #[error("menu error: {0}")]
    Menu(#[from] sustenance_menu::MenuError),

    /// Corpus store error.
    #[error("corpus error: {0}")]
    CorpusStore(#[from] sustenance_menu::CorpusStoreError),

    /// No corpus has been ingested yet.
    #[error("no corpus at '{path}'; run `sust ingest <FILE>` first")]
    NoCorpus {
        /// Where the corpus was expected.
        path: PathBuf,
    },

    /// An input file could not be read.
    #[error("failed to read '{path}': {source}")]
    ReadInput {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
#[derive(Debug)]
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Resolved corpus file.
    pub corpus_path: PathBuf,
    /// Matcher weights from config.
    pub costs: AlignmentCosts,
}

impl CommandContext {
    /// Creates a command context from CLI arguments and the loaded config.
    ///
    /// The corpus path is taken from `--corpus` (or `SUST_CORPUS`), then the
    /// config file, then the default cache location.
    pub fn from_cli(cli: &Cli, config: &Config) -> Result<Self> {
        let corpus_path = match (&cli.corpus, &config.corpus) {
            (Some(path), _) | (None, Some(path)) => path.clone(),
            (None, None) => CorpusStore::default_path()?,
        };

        let colors_allowed = env::var_os("NO_COLOR").is_none();
        let use_colors = !cli.no_color && colors_allowed && config.output.color != Some(false);

        Ok(Self {
            json_output: cli.json,
            use_colors,
            quiet: cli.quiet,
            corpus_path,
            costs: config.matcher,
        })
    }

    /// Returns the store for the resolved corpus path.
    pub fn store(&self) -> CorpusStore {
        CorpusStore::with_path(&self.corpus_path)
    }

    /// Loads the ingested corpus.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::NoCorpus` if nothing has been ingested yet.
    pub fn load_corpus(&self) -> Result<Corpus> {
        let store = self.store();
        if !store.exists() {
            return Err(CommandError::NoCorpus {
                path: self.corpus_path.clone(),
            });
        }
        Ok(store.load()?)
    }

    /// Builds a query engine with the configured matcher weights.
    pub fn engine(&self) -> QueryEngine {
        QueryEngine::new(Matcher::new(self.costs))
    }
}
