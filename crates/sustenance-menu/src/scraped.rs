//! Raw scraper output and its conversion into a [`Corpus`].
//!
//! The scraper emits one [`ScrapedLocation`] per dining hall with its rows in
//! page order. Header rows are already flagged (`"group": true`). [`ingest`]
//! validates each row, normalizes allergen tags, and runs [`group`] on every
//! location.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MenuError, MenuResult};
use crate::group::group;
use crate::models::{menu_date, Corpus, GroupTag, LocationMenu, MenuItem};

/// Icon name the site uses to mark gluten-free dishes.
const GLUTEN_ICON: &str = "gluten";

/// Tag recorded for gluten-free dishes.
const GLUTEN_FREE_TAG: &str = "nogluten";

/// A menu row as scraped, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapedItem {
    /// Display text of the row.
    #[serde(default)]
    pub name: Option<String>,

    /// Meal section heading the row was found under.
    #[serde(default)]
    pub course: Option<String>,

    /// `true` when the row announces a bar, otherwise usually `null`.
    #[serde(default)]
    pub group: GroupTag,

    /// Allergen icon names.
    #[serde(default)]
    pub has: Vec<String>,
}

impl ScrapedItem {
    /// Validates the row and converts it into a [`MenuItem`].
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::MalformedItem`] if `name` or `course` is missing.
    pub fn into_menu_item(self, location: &str, index: usize) -> MenuResult<MenuItem> {
        let name = self
            .name
            .ok_or_else(|| MenuError::malformed(location, index, "name"))?;
        let course = self
            .course
            .ok_or_else(|| MenuError::malformed(location, index, "course"))?;

        Ok(MenuItem {
            name,
            course,
            group: self.group,
            has: normalize_tags(self.has),
        })
    }
}

/// One location's scrape, before validation and grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapedLocation {
    /// Zero-padded numeric identifier.
    pub location_id: String,

    /// Display name of the location.
    pub location: String,

    /// Calendar date of the menu.
    #[serde(with = "menu_date")]
    pub date: NaiveDate,

    /// Capture timestamp.
    #[serde(alias = "asof")]
    pub captured_at: NaiveDateTime,

    /// Rows in page order.
    #[serde(alias = "menu", default)]
    pub items: Vec<ScrapedItem>,
}

impl ScrapedLocation {
    /// Validates every row and groups the result.
    ///
    /// # Errors
    ///
    /// Returns the first [`MenuError::MalformedItem`] encountered.
    pub fn into_location_menu(self) -> MenuResult<LocationMenu> {
        let items = self
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| item.into_menu_item(&self.location, index))
            .collect::<MenuResult<Vec<_>>>()?;

        let scraped = items.len();
        let items = group(items);
        debug!(
            location = %self.location,
            scraped,
            kept = items.len(),
            "ingested location"
        );

        Ok(LocationMenu {
            location_id: self.location_id,
            location: self.location,
            date: self.date,
            captured_at: self.captured_at,
            items,
        })
    }
}

/// Builds a grouped corpus from scraped locations.
///
/// # Errors
///
/// Returns [`MenuError::MalformedItem`] for the first row missing a required
/// field. Nothing is returned for the other locations in that case.
pub fn ingest(scraped: Vec<ScrapedLocation>) -> MenuResult<Corpus> {
    scraped
        .into_iter()
        .map(ScrapedLocation::into_location_menu)
        .collect::<MenuResult<Vec<_>>>()
        .map(Corpus::from)
}

/// Parses a scraped JSON dump and ingests it.
///
/// # Errors
///
/// Returns [`MenuError::Json`] for invalid JSON or wrong value kinds, and
/// [`MenuError::MalformedItem`] for rows missing a required field.
pub fn ingest_json(json: &str) -> MenuResult<Corpus> {
    let scraped: Vec<ScrapedLocation> = serde_json::from_str(json)?;
    ingest(scraped)
}

/// Normalizes allergen icon names into tags, dropping blanks and duplicates.
fn normalize_tags(raw: Vec<String>) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(raw.len());
    for tag in raw {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        let tag = if tag == GLUTEN_ICON {
            GLUTEN_FREE_TAG
        } else {
            tag
        };
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scraped(name: Option<&str>, course: Option<&str>, group: GroupTag) -> ScrapedItem {
        ScrapedItem {
            name: name.map(String::from),
            course: course.map(String::from),
            group,
            has: Vec::new(),
        }
    }

    fn location(items: Vec<ScrapedItem>) -> ScrapedLocation {
        let date = NaiveDate::from_ymd_opt(2019, 2, 14).unwrap();
        ScrapedLocation {
            location_id: "25".to_string(),
            location: "Porter Kresge Dining Hall".to_string(),
            date,
            captured_at: date.and_hms_opt(12, 0, 0).unwrap(),
            items,
        }
    }

    #[test]
    fn test_into_menu_item_missing_name() {
        let err = scraped(None, Some("Dinner"), GroupTag::Ungrouped)
            .into_menu_item("Porter Kresge Dining Hall", 2)
            .unwrap_err();

        assert!(matches!(
            err,
            MenuError::MalformedItem {
                index: 2,
                field: "name",
                ..
            }
        ));
    }

    #[test]
    fn test_into_menu_item_missing_course() {
        let err = scraped(Some("Carnitas"), None, GroupTag::Ungrouped)
            .into_menu_item("Porter Kresge Dining Hall", 0)
            .unwrap_err();

        assert!(matches!(err, MenuError::MalformedItem { field: "course", .. }));
    }

    #[test]
    fn test_gluten_icon_becomes_nogluten() {
        let item = ScrapedItem {
            has: vec!["gluten".into(), "soy".into(), " ".into(), "soy".into()],
            ..scraped(Some("Rice"), Some("Lunch"), GroupTag::Ungrouped)
        }
        .into_menu_item("x", 0)
        .unwrap();

        assert_eq!(item.has, vec!["nogluten", "soy"]);
    }

    #[test]
    fn test_location_is_grouped() {
        let menu = location(vec![
            scraped(Some("Roasted Potato"), Some("Dinner"), GroupTag::Ungrouped),
            scraped(Some("Taco Bar"), Some("Dinner"), GroupTag::PendingHeader),
            scraped(Some("Carnitas"), Some("Dinner"), GroupTag::Ungrouped),
        ])
        .into_location_menu()
        .unwrap();

        assert_eq!(menu.items.len(), 2);
        assert_eq!(menu.items[1].group_name(), Some("Taco Bar"));
    }

    #[test]
    fn test_malformed_item_aborts_location() {
        // A header with no course would silently capture the wrong items.
        let result = location(vec![
            scraped(Some("Taco Bar"), None, GroupTag::PendingHeader),
            scraped(Some("Carnitas"), Some("Dinner"), GroupTag::Ungrouped),
        ])
        .into_location_menu();

        assert!(result.is_err());
    }

    #[test]
    fn test_ingest_json_reports_wrong_kind() {
        let json = r#"[{
            "location_id": "25",
            "location": "Porter Kresge Dining Hall",
            "date": "02/14/2019",
            "asof": "2019-02-14T12:00:00",
            "menu": [{"name": "Carnitas", "course": "Dinner", "group": false, "has": []}]
        }]"#;

        assert!(matches!(ingest_json(json), Err(MenuError::Json(_))));
    }

    #[test]
    fn test_ingest_preserves_location_order() {
        let mut second = location(Vec::new());
        second.location = "Crown Merill Dining Hall".to_string();
        second.location_id = "20".to_string();

        let corpus = ingest(vec![location(Vec::new()), second]).unwrap();
        let names: Vec<&str> = corpus.iter().map(|l| l.location.as_str()).collect();
        assert_eq!(
            names,
            vec!["Porter Kresge Dining Hall", "Crown Merill Dining Hall"]
        );
    }
}
