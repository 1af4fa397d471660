//! Search command implementation.
//!
//! Runs a fuzzy multi-field query against the ingested corpus.

use sustenance_query::{Query, Selector};
use tracing::debug;

use super::{CommandContext, Result};
use crate::output::{format_results_json, format_results_text};

/// Options for the search command.
#[derive(Debug, Default)]
pub struct SearchOptions {
    /// Food name tokens.
    pub foods: Vec<String>,
    /// Location tokens.
    pub locations: Vec<String>,
    /// Course tokens.
    pub courses: Vec<String>,
    /// Bar tokens.
    pub groups: Vec<String>,
    /// Dietary tags to exclude.
    pub exclude: Vec<String>,
}

impl SearchOptions {
    /// Builds the query. A dimension with no tokens on the command line is
    /// left unfiltered.
    pub fn to_query(&self) -> Query {
        Query {
            foods: selector(&self.foods),
            locations: selector(&self.locations),
            courses: selector(&self.courses),
            groups: selector(&self.groups),
            restrictions: selector(&self.exclude),
        }
    }
}

fn selector(tokens: &[String]) -> Selector {
    if tokens.is_empty() {
        Selector::All
    } else {
        Selector::any_of(tokens.iter().cloned())
    }
}

/// Executes the search command.
///
/// # Errors
///
/// Returns an error if the corpus cannot be loaded.
pub fn execute(ctx: &CommandContext, opts: &SearchOptions) -> Result<()> {
    let corpus = ctx.load_corpus()?;
    let query = opts.to_query();

    debug!(locations = corpus.len(), items = corpus.item_count(), "searching corpus");

    let results = ctx.engine().search(&corpus, &query);

    if ctx.json_output {
        println!("{}", format_results_json(&results)?);
    } else if !ctx.quiet {
        print!("{}", format_results_text(&results, ctx.use_colors));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_are_unfiltered() {
        assert!(SearchOptions::default().to_query().is_unfiltered());
    }

    #[test]
    fn test_options_map_to_dimensions() {
        let opts = SearchOptions {
            foods: vec!["potato".into()],
            courses: vec!["night".into(), "dinner".into()],
            exclude: vec!["nogluten".into()],
            ..SearchOptions::default()
        };

        let query = opts.to_query();
        assert_eq!(query.foods, Selector::any_of(["potato"]));
        assert_eq!(query.courses, Selector::any_of(["night", "dinner"]));
        assert_eq!(query.restrictions, Selector::any_of(["nogluten"]));
        assert_eq!(query.locations, Selector::All);
        assert_eq!(query.groups, Selector::All);
    }
}
