//! Menu item and its bar-membership tag.

use std::fmt;

use serde::de::{self, Deserializer, Unexpected};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Bar membership of a menu item.
///
/// On the wire this is `null` (ungrouped), `true` (the item announces a bar),
/// or the name of the bar the item belongs to.
///
/// # Examples
///
/// ```
/// use sustenance_menu::GroupTag;
///
/// let tag: GroupTag = serde_json::from_str("\"Taco Bar\"").unwrap();
/// assert_eq!(tag.name(), Some("Taco Bar"));
///
/// let header: GroupTag = serde_json::from_str("true").unwrap();
/// assert!(header.is_pending_header());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum GroupTag {
    /// The item belongs to no bar.
    #[default]
    Ungrouped,
    /// The item is a bar header. Only valid before grouping.
    PendingHeader,
    /// The item belongs to the named bar.
    MemberOf(String),
}

impl GroupTag {
    /// Returns the resolved bar name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            GroupTag::MemberOf(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if this is the transient header marker.
    pub fn is_pending_header(&self) -> bool {
        matches!(self, GroupTag::PendingHeader)
    }
}

impl Serialize for GroupTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GroupTag::Ungrouped => serializer.serialize_none(),
            GroupTag::PendingHeader => serializer.serialize_bool(true),
            GroupTag::MemberOf(name) => serializer.serialize_str(name),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireGroup {
    Flag(bool),
    Name(String),
}

impl<'de> Deserialize<'de> for GroupTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<WireGroup>::deserialize(deserializer)? {
            None => Ok(GroupTag::Ungrouped),
            Some(WireGroup::Flag(true)) => Ok(GroupTag::PendingHeader),
            Some(WireGroup::Flag(false)) => Err(de::Error::invalid_value(
                Unexpected::Bool(false),
                &"null, true, or a group name",
            )),
            Some(WireGroup::Name(name)) => Ok(GroupTag::MemberOf(name)),
        }
    }
}

/// A single entry of a location's menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display text of the food item (or of the bar, for a header).
    pub name: String,

    /// Meal section label, e.g. "Dinner" or "Late Night".
    pub course: String,

    /// Bar membership.
    #[serde(default)]
    pub group: GroupTag,

    /// Dietary and allergen tags, e.g. `nogluten`, `soy`, `dairy`.
    #[serde(default)]
    pub has: Vec<String>,
}

impl MenuItem {
    /// Creates an ungrouped item with no tags.
    pub fn new(name: impl Into<String>, course: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            course: course.into(),
            group: GroupTag::Ungrouped,
            has: Vec::new(),
        }
    }

    /// Creates a bar header for the given course.
    pub fn header(name: impl Into<String>, course: impl Into<String>) -> Self {
        Self {
            group: GroupTag::PendingHeader,
            ..Self::new(name, course)
        }
    }

    /// Sets the item's bar membership.
    pub fn with_group(mut self, group: GroupTag) -> Self {
        self.group = group;
        self
    }

    /// Sets the item's dietary tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.has = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if this item announces a bar.
    pub fn is_header(&self) -> bool {
        self.group.is_pending_header()
    }

    /// Returns the resolved bar name, or `None` for ungrouped items.
    pub fn group_name(&self) -> Option<&str> {
        self.group.name()
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -- {}, {}, contains: {}",
            self.name,
            self.course,
            self.group_name().unwrap_or(""),
            self.has.join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_tag_deserialize_variants() {
        let tag: GroupTag = serde_json::from_str("null").unwrap();
        assert_eq!(tag, GroupTag::Ungrouped);

        let tag: GroupTag = serde_json::from_str("true").unwrap();
        assert_eq!(tag, GroupTag::PendingHeader);

        let tag: GroupTag = serde_json::from_str(r#""Pasta Bar""#).unwrap();
        assert_eq!(tag, GroupTag::MemberOf("Pasta Bar".to_string()));
    }

    #[test]
    fn test_group_tag_rejects_wrong_kinds() {
        assert!(serde_json::from_str::<GroupTag>("false").is_err());
        assert!(serde_json::from_str::<GroupTag>("42").is_err());
        assert!(serde_json::from_str::<GroupTag>("[]").is_err());
    }

    #[test]
    fn test_group_tag_serialize() {
        assert_eq!(serde_json::to_string(&GroupTag::Ungrouped).unwrap(), "null");
        assert_eq!(serde_json::to_string(&GroupTag::PendingHeader).unwrap(), "true");
        assert_eq!(
            serde_json::to_string(&GroupTag::MemberOf("Taco Bar".into())).unwrap(),
            r#""Taco Bar""#
        );
    }

    #[test]
    fn test_menu_item_deserialize_minimal() {
        let json = r#"{"name": "Carnitas", "course": "Dinner"}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item, MenuItem::new("Carnitas", "Dinner"));
    }

    #[test]
    fn test_menu_item_missing_course_fails() {
        let json = r#"{"name": "Carnitas", "group": null, "has": []}"#;
        assert!(serde_json::from_str::<MenuItem>(json).is_err());
    }

    #[test]
    fn test_header_constructor() {
        let item = MenuItem::header("Taco Bar", "Dinner");
        assert!(item.is_header());
        assert_eq!(item.group_name(), None);
    }

    #[test]
    fn test_display_line() {
        let item = MenuItem::new("Carnitas", "Dinner")
            .with_group(GroupTag::MemberOf("Taco Bar".into()))
            .with_tags(["soy", "dairy"]);
        assert_eq!(
            item.to_string(),
            "Carnitas -- Dinner, Taco Bar, contains: soy dairy"
        );

        let plain = MenuItem::new("Roasted Potato", "Dinner");
        assert_eq!(plain.to_string(), "Roasted Potato -- Dinner, , contains: ");
    }
}
