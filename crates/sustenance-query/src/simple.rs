//! Literal substring search.
//!
//! A lighter alternative to [`QueryEngine`](crate::QueryEngine) for callers
//! that want exact matching: an item is reported when its name contains any
//! of the given terms, ignoring case. No typo tolerance.

use sustenance_menu::Corpus;

use crate::query::{LocationMatches, SearchResults};
use crate::report::ReportLayout;

/// Finds items whose name contains any of `terms` (case-insensitive).
///
/// Every location is kept. Each item appears at most once, even if several
/// terms hit it.
pub fn simple_search_results<'a, S: AsRef<str>>(
    corpus: &'a Corpus,
    terms: &[S],
) -> SearchResults<'a> {
    let terms: Vec<String> = terms.iter().map(|t| t.as_ref().to_lowercase()).collect();

    let locations = corpus
        .iter()
        .map(|menu| {
            let mut matches = LocationMatches::all(menu);
            matches.items.retain(|item| {
                let name = item.name.to_lowercase();
                terms.iter().any(|term| name.contains(term.as_str()))
            });
            matches
        })
        .collect();

    SearchResults::from_locations(ReportLayout::Flush, locations)
}

/// Renders the report for [`simple_search_results`], with item lines flush
/// left.
///
/// ```
/// use sustenance_menu::Corpus;
/// use sustenance_query::simple_search;
///
/// assert_eq!(simple_search(&Corpus::new(), &["potato"]), "");
/// ```
pub fn simple_search<S: AsRef<str>>(corpus: &Corpus, terms: &[S]) -> String {
    simple_search_results(corpus, terms).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sustenance_menu::{LocationMenu, MenuItem};

    fn corpus() -> Corpus {
        let date = NaiveDate::from_ymd_opt(2019, 2, 14).unwrap();
        let captured = date.and_hms_opt(12, 0, 0).unwrap();
        Corpus::from(vec![
            LocationMenu::new("05", "Cowell Stevenson Dining Hall", date, captured).with_items(
                vec![
                    MenuItem::new("Roasted Potato", "Dinner"),
                    MenuItem::new("Potato Potato Soup", "Lunch"),
                    MenuItem::new("Carnitas", "Dinner"),
                ],
            ),
            LocationMenu::new("20", "Crown Merill Dining Hall", date, captured)
                .with_items(vec![MenuItem::new("Tater Tots", "Breakfast")]),
        ])
    }

    fn names<'a>(results: &SearchResults<'a>) -> Vec<&'a str> {
        results.items().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn test_substring_is_case_insensitive() {
        let corpus = corpus();
        let results = simple_search_results(&corpus, &["POTATO"]);
        assert_eq!(names(&results), vec!["Roasted Potato", "Potato Potato Soup"]);
    }

    #[test]
    fn test_no_typo_tolerance() {
        let corpus = corpus();
        assert_eq!(simple_search_results(&corpus, &["potatoes"]).item_count(), 0);
        assert_eq!(simple_search_results(&corpus, &["tato"]).item_count(), 2);
    }

    #[test]
    fn test_item_reported_once_for_several_terms() {
        let corpus = corpus();
        let results = simple_search_results(&corpus, &["potato", "soup"]);
        assert_eq!(names(&results), vec!["Roasted Potato", "Potato Potato Soup"]);
    }

    #[test]
    fn test_every_location_is_reported() {
        let corpus = corpus();
        let report = simple_search(&corpus, &["carnitas"]);
        assert_eq!(
            report,
            "Cowell Stevenson Dining Hall:\n\
             Carnitas -- Dinner, , contains: \n\
             \n\
             Crown Merill Dining Hall:\n\
             \n"
        );
    }

    #[test]
    fn test_no_terms_matches_nothing() {
        let corpus = corpus();
        let results = simple_search_results::<&str>(&corpus, &[]);
        assert_eq!(results.len(), 2);
        assert_eq!(results.item_count(), 0);
    }
}
