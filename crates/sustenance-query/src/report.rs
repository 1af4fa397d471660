//! Plain-text report layout.
//!
//! ```text
//! Porter Kresge Dining Hall:
//! 	Carnitas -- Dinner, Taco Bar, contains: soy
//!
//! ```
//!
//! Literal search prints the same blocks with the item lines flush left.

use std::fmt;

use sustenance_menu::MenuItem;

/// How item lines sit under their location name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportLayout {
    /// Item lines start with a tab. Used by [`QueryEngine`](crate::QueryEngine).
    #[default]
    Indented,
    /// Item lines start at column zero. Used by [`simple_search`](crate::simple_search).
    Flush,
}

impl ReportLayout {
    /// Text written before each item line.
    pub fn item_prefix(self) -> &'static str {
        match self {
            ReportLayout::Indented => "\t",
            ReportLayout::Flush => "",
        }
    }
}

/// Writes one location block: its name, one line per item, and a blank
/// line. Empty locations still get their header.
pub(crate) fn write_section<W: fmt::Write>(
    out: &mut W,
    layout: ReportLayout,
    location: &str,
    items: &[&MenuItem],
) -> fmt::Result {
    writeln!(out, "{location}:")?;
    for item in items {
        writeln!(out, "{}{item}", layout.item_prefix())?;
    }
    writeln!(out)
}
