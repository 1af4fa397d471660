//! Multi-field menu queries.
//!
//! A [`Query`] narrows a corpus along five dimensions:
//!
//! - `locations` - dining hall name
//! - `courses` - meal section ("Breakfast", "Late Night")
//! - `groups` - bar the item is served at
//! - `foods` - item name
//! - `restrictions` - dietary tags the item must *not* carry
//!
//! Tokens within a dimension are alternatives (an item survives if any token
//! matches); dimensions combine with AND. Text dimensions match a token
//! against the whole field or any single word of it.
//!
//! # Example
//!
//! ```
//! use sustenance_query::{Query, Selector};
//!
//! let query = Query::new()
//!     .foods(["potato"])
//!     .locations(["nine"])
//!     .courses(["night"])
//!     .restrictions(["nogluten"]);
//!
//! assert_eq!(query.groups, Selector::All);
//! ```

mod engine;

pub use engine::{LocationMatches, QueryEngine, SearchResults};

/// Filter for one query dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selector {
    /// No filtering on this dimension.
    #[default]
    All,
    /// Keep entries matching any of these tokens.
    ///
    /// An empty list keeps nothing on the inclusive dimensions and excludes
    /// nothing on `restrictions`.
    AnyOf(Vec<String>),
}

impl Selector {
    /// Creates a selector from query tokens.
    pub fn any_of<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selector::AnyOf(tokens.into_iter().map(Into::into).collect())
    }

    /// Returns true if this dimension is unfiltered.
    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    /// Returns the tokens, or `None` when unfiltered.
    pub fn tokens(&self) -> Option<&[String]> {
        match self {
            Selector::All => None,
            Selector::AnyOf(tokens) => Some(tokens),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Selector {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Selector::any_of(iter)
    }
}

/// A search over the five menu dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Item name tokens.
    pub foods: Selector,
    /// Location name tokens.
    pub locations: Selector,
    /// Course tokens.
    pub courses: Selector,
    /// Bar name tokens.
    pub groups: Selector,
    /// Dietary tags to exclude.
    pub restrictions: Selector,
}

impl Query {
    /// Creates a query that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts item names.
    pub fn foods<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.foods = Selector::any_of(tokens);
        self
    }

    /// Restricts locations.
    pub fn locations<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locations = Selector::any_of(tokens);
        self
    }

    /// Restricts courses.
    pub fn courses<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.courses = Selector::any_of(tokens);
        self
    }

    /// Restricts bars.
    pub fn groups<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = Selector::any_of(tokens);
        self
    }

    /// Excludes items carrying any of these dietary tags.
    pub fn restrictions<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.restrictions = Selector::any_of(tokens);
        self
    }

    /// Returns true if no dimension is filtered.
    pub fn is_unfiltered(&self) -> bool {
        [
            &self.foods,
            &self.locations,
            &self.courses,
            &self.groups,
            &self.restrictions,
        ]
        .iter()
        .all(|s| s.is_all())
    }
}
