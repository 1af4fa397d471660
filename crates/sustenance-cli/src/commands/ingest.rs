//! Ingest command implementation.
//!
//! Reads a scraped menu dump, resolves bar headers, and stores the result as
//! the corpus used by `search` and `find`.

use std::fs;
use std::path::Path;

use serde::Serialize;
use sustenance_menu::{ingest_json, Corpus};
use tracing::debug;

use super::{CommandContext, CommandError, Result};

/// Summary of an ingest run.
#[derive(Debug, Serialize)]
pub struct IngestSummary {
    /// Where the corpus was written.
    pub path: String,
    /// Number of locations ingested.
    pub locations: usize,
    /// Number of menu items kept after grouping.
    pub items: usize,
}

/// Reads and groups a scraped dump.
///
/// # Errors
///
/// Returns `CommandError::ReadInput` if the file cannot be read, and
/// `CommandError::Menu` if the dump is invalid or has malformed items.
pub fn load_dump(file: &Path) -> Result<Corpus> {
    let contents = fs::read_to_string(file).map_err(|e| CommandError::ReadInput {
        path: file.to_path_buf(),
        source: e,
    })?;
    Ok(ingest_json(&contents)?)
}

/// Executes the ingest command.
///
/// # Errors
///
/// Returns an error if the dump cannot be read or validated, or if the
/// corpus cannot be saved.
pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    debug!(file = %file.display(), "reading scrape");

    let corpus = load_dump(file)?;
    ctx.store().save(&corpus)?;

    let summary = IngestSummary {
        path: ctx.corpus_path.display().to_string(),
        locations: corpus.len(),
        items: corpus.item_count(),
    };

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if !ctx.quiet {
        println!(
            "Ingested {} locations ({} items) into {}",
            summary.locations, summary.items, summary.path
        );
    }

    Ok(())
}
