//! Error types for menu ingestion.

use thiserror::Error;

/// A specialized Result type for menu ingestion.
pub type MenuResult<T> = Result<T, MenuError>;

/// Errors that can occur while turning scraped records into a corpus.
#[derive(Debug, Error)]
pub enum MenuError {
    /// A scraped item is missing a field the grouping pass depends on.
    #[error("malformed item #{index} at {location}: missing `{field}`")]
    MalformedItem {
        /// Display name of the location the item was scraped from.
        location: String,
        /// Position of the item in the scraped menu.
        index: usize,
        /// The missing field.
        field: &'static str,
    },

    /// The scraped dump is not valid JSON, or a field holds the wrong kind of value.
    #[error("invalid scrape data: {0}")]
    Json(#[from] serde_json::Error),
}

impl MenuError {
    /// Creates a malformed item error.
    pub fn malformed(location: impl Into<String>, index: usize, field: &'static str) -> Self {
        MenuError::MalformedItem {
            location: location.into(),
            index,
            field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_item_display() {
        let err = MenuError::malformed("Porter Kresge Dining Hall", 3, "course");
        assert_eq!(
            err.to_string(),
            "malformed item #3 at Porter Kresge Dining Hall: missing `course`"
        );
    }

    #[test]
    fn test_json_error_from() {
        let source = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err: MenuError = source.into();
        assert!(err.to_string().starts_with("invalid scrape data:"));
    }
}
