//! Query evaluation against a corpus.

use std::fmt;

use sustenance_menu::{Corpus, LocationMenu, MenuItem};
use tracing::debug;

use super::{Query, Selector};
use crate::matcher::Matcher;
use crate::report::{self, ReportLayout};

/// Evaluates [`Query`] values against a corpus.
///
/// The engine never mutates the corpus: each search works on its own
/// per-location lists of item references, so repeated searches over one
/// corpus are independent.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use sustenance_menu::{Corpus, LocationMenu, MenuItem};
/// use sustenance_query::{Query, QueryEngine};
///
/// let date = NaiveDate::from_ymd_opt(2019, 2, 14).unwrap();
/// let menu = LocationMenu::new("25", "Porter Kresge Dining Hall", date, date.and_hms_opt(12, 0, 0).unwrap())
///     .with_items(vec![MenuItem::new("Roasted Potato", "Dinner"), MenuItem::new("Carnitas", "Dinner")]);
/// let corpus = Corpus::from(vec![menu]);
///
/// let results = QueryEngine::default().search(&corpus, &Query::new().foods(["potato"]));
/// assert_eq!(results.item_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEngine {
    matcher: Matcher,
}

impl QueryEngine {
    /// Creates an engine around a configured matcher.
    pub fn new(matcher: Matcher) -> Self {
        Self { matcher }
    }

    /// Returns the matcher used for every dimension.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Runs `query` against `corpus`.
    ///
    /// Locations are kept in corpus order. A location rejected by the
    /// location dimension is dropped; a location whose items are all
    /// filtered out is kept with no items.
    pub fn search<'a>(&self, corpus: &'a Corpus, query: &Query) -> SearchResults<'a> {
        let mut results = SearchResults {
            layout: ReportLayout::Indented,
            locations: corpus
                .iter()
                .filter(|menu| self.location_selected(&query.locations, menu))
                .map(LocationMatches::all)
                .collect(),
        };
        debug!(
            stage = "location",
            locations = results.len(),
            items = results.item_count(),
            "narrowed"
        );

        self.narrow(&mut results, "course", &query.courses, |item| {
            Some(item.course.as_str())
        });
        self.narrow(&mut results, "group", &query.groups, MenuItem::group_name);
        self.narrow(&mut results, "food", &query.foods, |item| {
            Some(item.name.as_str())
        });
        self.exclude_restricted(&mut results, &query.restrictions);

        results
    }

    fn location_selected(&self, selector: &Selector, menu: &LocationMenu) -> bool {
        match selector.tokens() {
            None => true,
            Some(tokens) => tokens
                .iter()
                .any(|token| self.matcher.matches_phrase(token, &menu.location)),
        }
    }

    /// Keeps items whose field matches any token. Items without the field
    /// (ungrouped items, for the group dimension) never survive an active filter.
    fn narrow<F>(&self, results: &mut SearchResults<'_>, stage: &str, selector: &Selector, field: F)
    where
        F: Fn(&MenuItem) -> Option<&str>,
    {
        let Some(tokens) = selector.tokens() else {
            return;
        };

        for location in &mut results.locations {
            location.items.retain(|item| {
                field(item).is_some_and(|text| {
                    tokens
                        .iter()
                        .any(|token| self.matcher.matches_phrase(token, text))
                })
            });
        }
        debug!(stage, items = results.item_count(), "narrowed");
    }

    /// Drops items carrying a tag that matches any restriction token.
    fn exclude_restricted(&self, results: &mut SearchResults<'_>, selector: &Selector) {
        let Some(tokens) = selector.tokens() else {
            return;
        };

        for location in &mut results.locations {
            location.items.retain(|item| {
                tokens.iter().all(|token| {
                    !item
                        .has
                        .iter()
                        .any(|tag| self.matcher.matches(token, tag))
                })
            });
        }
        debug!(stage = "restriction", items = results.item_count(), "narrowed");
    }
}

/// Items of one location that survived a search.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationMatches<'a> {
    /// The location's menu in the corpus.
    pub menu: &'a LocationMenu,
    /// Surviving items, in menu order.
    pub items: Vec<&'a MenuItem>,
}

impl<'a> LocationMatches<'a> {
    /// Starts from every item of the menu.
    pub fn all(menu: &'a LocationMenu) -> Self {
        Self {
            menu,
            items: menu.items.iter().collect(),
        }
    }

    /// Display name of the location.
    pub fn location(&self) -> &'a str {
        &self.menu.location
    }
}

/// Outcome of a search, grouped by location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults<'a> {
    layout: ReportLayout,
    locations: Vec<LocationMatches<'a>>,
}

impl<'a> SearchResults<'a> {
    pub(crate) fn from_locations(
        layout: ReportLayout,
        locations: Vec<LocationMatches<'a>>,
    ) -> Self {
        Self { layout, locations }
    }

    /// How the text report lays out item lines.
    pub fn layout(&self) -> ReportLayout {
        self.layout
    }

    /// Returns the per-location results in corpus order.
    pub fn locations(&self) -> &[LocationMatches<'a>] {
        &self.locations
    }

    /// Iterates over the per-location results.
    pub fn iter(&self) -> std::slice::Iter<'_, LocationMatches<'a>> {
        self.locations.iter()
    }

    /// Number of locations in the result.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if no location survived.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Total surviving items across all locations.
    pub fn item_count(&self) -> usize {
        self.locations.iter().map(|l| l.items.len()).sum()
    }

    /// Iterates over every surviving item.
    pub fn items(&self) -> impl Iterator<Item = &'a MenuItem> + '_ {
        self.locations.iter().flat_map(|l| l.items.iter().copied())
    }

    /// Renders the plain-text report.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SearchResults<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for location in &self.locations {
            report::write_section(f, self.layout, location.location(), &location.items)?;
        }
        Ok(())
    }
}
