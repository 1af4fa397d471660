//! Fuzzy search over dining-hall menus.
//!
//! Two entry points produce the plain-text report:
//!
//! - [`search_report`] runs a [`Query`] through the [`QueryEngine`], which
//!   compares tokens with the edit-distance [`Matcher`]
//! - [`simple_search`] does literal, case-insensitive substring matching on
//!   item names
//!
//! # Example
//!
//! ```
//! use sustenance_menu::ingest_json;
//! use sustenance_query::{search_report, Query};
//!
//! let corpus = ingest_json(r#"[{
//!     "location_id": "25",
//!     "location": "Porter Kresge Dining Hall",
//!     "date": "02/14/2019",
//!     "asof": "2019-02-14T12:00:00",
//!     "menu": [
//!         {"name": "Taco Bar", "course": "Dinner", "group": true, "has": []},
//!         {"name": "Carnitas", "course": "Dinner", "group": null, "has": []}
//!     ]
//! }]"#).unwrap();
//!
//! let report = search_report(&corpus, &Query::new().groups(["taco"]));
//! assert!(report.contains("Carnitas -- Dinner, Taco Bar"));
//! ```

pub mod matcher;
pub mod query;
mod report;
pub mod simple;

pub use matcher::{matches, AlignmentCosts, Matcher};
pub use query::{LocationMatches, Query, QueryEngine, SearchResults, Selector};
pub use report::ReportLayout;
pub use simple::{simple_search, simple_search_results};

use sustenance_menu::Corpus;

/// Runs `query` with the default matcher and renders the report.
pub fn search_report(corpus: &Corpus, query: &Query) -> String {
    QueryEngine::default().search(corpus, query).render()
}
