//! Convenient re-exports for common usage.
//!
//! ```
//! use sustenance_menu::prelude::*;
//! ```

pub use crate::error::{MenuError, MenuResult};
pub use crate::group::group;
pub use crate::models::{Corpus, GroupTag, LocationMenu, MenuItem};
pub use crate::scraped::{ingest, ingest_json, ScrapedItem, ScrapedLocation};
pub use crate::store::{CorpusStore, CorpusStoreError, StoreAction};
