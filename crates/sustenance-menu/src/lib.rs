//! Dining-hall menu data model.
//!
//! This crate holds the structures a menu scrape produces, the pass that
//! turns flagged bar headers into group labels, and on-disk storage for the
//! resulting corpus.
//!
//! # Quick Start
//!
//! ```
//! use sustenance_menu::prelude::*;
//!
//! let items = group(vec![
//!     MenuItem::header("Taco Bar", "Dinner"),
//!     MenuItem::new("Carnitas", "Dinner"),
//! ]);
//! assert_eq!(items[0].group_name(), Some("Taco Bar"));
//! ```

pub mod error;
pub mod group;
pub mod models;
pub mod prelude;
pub mod scraped;
pub mod store;

pub use error::{MenuError, MenuResult};
pub use group::group;
pub use models::{
    location_name, pad_location_id, Corpus, GroupTag, LocationMenu, MenuItem, LOCATIONS,
};
pub use scraped::{ingest, ingest_json, ScrapedItem, ScrapedLocation};
pub use store::{CorpusStore, CorpusStoreError, StoreAction};
