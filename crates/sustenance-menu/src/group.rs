//! Bar grouping.
//!
//! The dining site lists a themed station ("Taco Bar") as an ordinary menu
//! row, followed by the dishes served at it. [`group`] recovers that
//! structure in a single forward pass: every later item in the header's
//! course is tagged with the header's name, and the header rows that open a
//! bar are dropped.

use tracing::debug;

use crate::models::{GroupTag, MenuItem};

/// The bar currently collecting members, and the course it was announced in.
struct ActiveBar {
    name: String,
    course: String,
}

/// Resolves bar headers into group labels on the items that follow them.
///
/// Items keep their original order and no returned item is
/// [`GroupTag::PendingHeader`]. The active bar is applied before an item is
/// looked at as a header, so a header announced in the course of the bar
/// already running becomes a member of that bar and is kept. Only headers
/// that open a bar are dropped.
///
/// # Examples
///
/// ```
/// use sustenance_menu::{group, GroupTag, MenuItem};
///
/// let items = vec![
///     MenuItem::new("Roasted Potato", "Dinner"),
///     MenuItem::header("Taco Bar", "Dinner"),
///     MenuItem::new("Carnitas", "Dinner"),
/// ];
///
/// let grouped = group(items);
/// assert_eq!(grouped.len(), 2);
/// assert_eq!(grouped[0].group, GroupTag::Ungrouped);
/// assert_eq!(grouped[1].group_name(), Some("Taco Bar"));
/// ```
pub fn group(items: Vec<MenuItem>) -> Vec<MenuItem> {
    let mut active: Option<ActiveBar> = None;
    let mut grouped = Vec::with_capacity(items.len());
    let mut headers = 0usize;

    for mut item in items {
        if let Some(bar) = &active {
            if item.course == bar.course {
                item.group = GroupTag::MemberOf(bar.name.clone());
            }
        }

        if item.is_header() {
            headers += 1;
            active = Some(ActiveBar {
                name: item.name,
                course: item.course,
            });
            continue;
        }

        grouped.push(item);
    }

    debug!(headers, items = grouped.len(), "grouped menu");
    grouped
}
