//! Data model for scraped dining-hall menus.
//!
//! - [`MenuItem`] and [`GroupTag`] - a single menu entry and its bar membership
//! - [`LocationMenu`] and [`Corpus`] - per-location menus and the full scrape

mod item;
mod location;

pub use item::{GroupTag, MenuItem};
pub use location::{location_name, pad_location_id, Corpus, LocationMenu, LOCATIONS};

pub(crate) use location::menu_date;
