//! Find command implementation.
//!
//! Literal, case-insensitive substring search on item names.

use sustenance_query::simple_search_results;

use super::{CommandContext, Result};
use crate::output::{format_results_json, format_results_text};

/// Executes the find command.
///
/// # Errors
///
/// Returns an error if the corpus cannot be loaded.
pub fn execute(ctx: &CommandContext, terms: &[String]) -> Result<()> {
    let corpus = ctx.load_corpus()?;
    let results = simple_search_results(&corpus, terms);

    if ctx.json_output {
        println!("{}", format_results_json(&results)?);
    } else if !ctx.quiet {
        print!("{}", format_results_text(&results, ctx.use_colors));
    }

    Ok(())
}
