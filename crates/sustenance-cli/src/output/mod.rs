//! Output formatting utilities for the sust CLI.
//!
//! - [`results`] - Search and find results (text report, JSON)
//! - [`locations`] - Known dining locations (table, JSON)

mod locations;
mod results;

pub use locations::{format_locations_json, format_locations_table};
pub use results::{format_results_json, format_results_text};
