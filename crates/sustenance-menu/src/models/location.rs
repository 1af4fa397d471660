//! Per-location menus and the corpus they form.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::item::MenuItem;

/// Dining halls that publish their menus in the bar-header layout.
///
/// Each entry is `(location number, display name)`.
pub const LOCATIONS: &[(u32, &str)] = &[
    (5, "Cowell Stevenson Dining Hall"),
    (20, "Crown Merill Dining Hall"),
    (25, "Porter Kresge Dining Hall"),
    (30, "Rachel Carson Oakes Dining Hall"),
    (40, "Colleges Nine & Ten Dining Hall"),
];

/// Formats a location number as the two-digit identifier used on the wire.
///
/// ```
/// use sustenance_menu::pad_location_id;
///
/// assert_eq!(pad_location_id(5), "05");
/// assert_eq!(pad_location_id(40), "40");
/// ```
pub fn pad_location_id(id: u32) -> String {
    format!("{id:02}")
}

/// Looks up the display name of a known location number.
pub fn location_name(id: u32) -> Option<&'static str> {
    LOCATIONS
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, name)| *name)
}

/// The menu captured for one dining location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationMenu {
    /// Zero-padded numeric identifier, e.g. `"05"`.
    pub location_id: String,

    /// Display name of the location.
    pub location: String,

    /// Calendar date the menu was captured for.
    #[serde(with = "menu_date")]
    pub date: NaiveDate,

    /// When the menu was captured (UTC, no offset).
    #[serde(alias = "asof")]
    pub captured_at: NaiveDateTime,

    /// Menu entries in scrape order.
    #[serde(alias = "menu", default)]
    pub items: Vec<MenuItem>,
}

impl LocationMenu {
    /// Creates an empty menu for a location.
    pub fn new(
        location_id: impl Into<String>,
        location: impl Into<String>,
        date: NaiveDate,
        captured_at: NaiveDateTime,
    ) -> Self {
        Self {
            location_id: location_id.into(),
            location: location.into(),
            date,
            captured_at,
            items: Vec::new(),
        }
    }

    /// Replaces the menu entries.
    pub fn with_items(mut self, items: Vec<MenuItem>) -> Self {
        self.items = items;
        self
    }
}

/// All location menus produced by one scrape pass, in scrape order.
///
/// Serialized as a plain JSON array of [`LocationMenu`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    locations: Vec<LocationMenu>,
}

impl Corpus {
    /// Creates an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the location menus in scrape order.
    pub fn locations(&self) -> &[LocationMenu] {
        &self.locations
    }

    /// Iterates over the location menus.
    pub fn iter(&self) -> std::slice::Iter<'_, LocationMenu> {
        self.locations.iter()
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if the corpus holds no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Total number of items across all locations.
    pub fn item_count(&self) -> usize {
        self.locations.iter().map(|l| l.items.len()).sum()
    }
}

impl From<Vec<LocationMenu>> for Corpus {
    fn from(locations: Vec<LocationMenu>) -> Self {
        Self { locations }
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a LocationMenu;
    type IntoIter = std::slice::Iter<'a, LocationMenu>;

    fn into_iter(self) -> Self::IntoIter {
        self.locations.iter()
    }
}

/// Serde adapter for menu dates.
///
/// Written as `MM/DD/YYYY` (the dining site's format); ISO `YYYY-MM-DD` is
/// also accepted on read.
pub(crate) mod menu_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const SITE_FORMAT: &str = "%m/%d/%Y";
    const ISO_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(SITE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, SITE_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(&raw, ISO_FORMAT))
            .map_err(|_| de::Error::custom(format!("invalid menu date: {raw}")))
    }
}
