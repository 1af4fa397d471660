//! Locations command implementation.
//!
//! Lists the dining halls the scraper knows about.

use super::{CommandContext, Result};
use crate::output::{format_locations_json, format_locations_table};

/// Executes the locations command.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    if ctx.json_output {
        println!("{}", format_locations_json()?);
    } else if !ctx.quiet {
        print!("{}", format_locations_table(ctx.use_colors));
    }

    Ok(())
}
