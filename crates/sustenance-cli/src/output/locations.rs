//! Location list output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;
use sustenance_menu::{pad_location_id, LOCATIONS};

/// JSON output structure for the locations command.
#[derive(Serialize)]
pub struct LocationsListOutput {
    pub locations: Vec<LocationEntry>,
}

/// JSON output structure for a single location.
#[derive(Serialize)]
pub struct LocationEntry {
    pub id: String,
    pub name: &'static str,
}

/// Formats the known locations as JSON.
pub fn format_locations_json() -> Result<String, serde_json::Error> {
    let output = LocationsListOutput {
        locations: LOCATIONS
            .iter()
            .map(|&(id, name)| LocationEntry {
                id: pad_location_id(id),
                name,
            })
            .collect(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats the known locations as a table.
pub fn format_locations_table(use_colors: bool) -> String {
    let mut output = String::new();

    let header = format!("{:<4} {}", "ID", "Name");
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for (id, name) in LOCATIONS {
        output.push_str(&format!("{:<4} {}\n", pad_location_id(*id), name));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_padded_ids() {
        let table = format_locations_table(false);
        assert!(table.starts_with("ID   Name\n"));
        assert!(table.contains("05   Cowell Stevenson Dining Hall\n"));
        assert!(table.contains("40   Colleges Nine & Ten Dining Hall\n"));
        assert_eq!(table.lines().count(), LOCATIONS.len() + 1);
    }

    #[test]
    fn test_json_lists_every_location() {
        let json = format_locations_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let locations = value["locations"].as_array().unwrap();
        assert_eq!(locations.len(), LOCATIONS.len());
        assert_eq!(locations[0]["id"], "05");
        assert_eq!(locations[0]["name"], "Cowell Stevenson Dining Hall");
    }
}
