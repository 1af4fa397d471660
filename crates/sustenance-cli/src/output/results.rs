//! Search result output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;
use sustenance_menu::MenuItem;
use sustenance_query::SearchResults;

/// JSON output structure for search and find.
#[derive(Serialize)]
pub struct ResultsOutput<'a> {
    pub locations: Vec<LocationOutput<'a>>,
    pub total_items: usize,
}

/// JSON output structure for one location's matches.
#[derive(Serialize)]
pub struct LocationOutput<'a> {
    pub location_id: &'a str,
    pub location: &'a str,
    pub date: String,
    pub items: Vec<ItemOutput<'a>>,
}

/// JSON output structure for a single menu item.
#[derive(Serialize)]
pub struct ItemOutput<'a> {
    pub name: &'a str,
    pub course: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<&'a str>,
    pub has: &'a [String],
}

impl<'a> From<&'a MenuItem> for ItemOutput<'a> {
    fn from(item: &'a MenuItem) -> Self {
        Self {
            name: &item.name,
            course: &item.course,
            group: item.group_name(),
            has: &item.has,
        }
    }
}

/// Formats search results as JSON.
pub fn format_results_json(results: &SearchResults<'_>) -> Result<String, serde_json::Error> {
    let locations = results
        .iter()
        .map(|l| LocationOutput {
            location_id: &l.menu.location_id,
            location: l.location(),
            date: l.menu.date.format("%Y-%m-%d").to_string(),
            items: l.items.iter().map(|item| ItemOutput::from(*item)).collect(),
        })
        .collect();

    let output = ResultsOutput {
        locations,
        total_items: results.item_count(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats search results as the text report.
///
/// Without colors this is exactly [`SearchResults::render`].
pub fn format_results_text(results: &SearchResults<'_>, use_colors: bool) -> String {
    if !use_colors {
        return results.render();
    }

    let prefix = results.layout().item_prefix();
    let mut output = String::new();
    for location in results.iter() {
        output.push_str(&format!("{}:\n", location.location().bold()));
        for item in &location.items {
            let group = item.group_name().unwrap_or("");
            output.push_str(&format!(
                "{prefix}{} -- {}, {}, contains: {}\n",
                item.name,
                item.course.dimmed(),
                group.cyan(),
                item.has.join(" ").yellow()
            ));
        }
        output.push('\n');
    }
    output
}
