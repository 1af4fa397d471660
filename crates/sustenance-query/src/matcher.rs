//! Approximate string equality.
//!
//! Menu text is scraped and user queries are typed, so exact comparison
//! misses plurals ("potatoes"), typos and alternate spellings. [`Matcher`]
//! instead computes a weighted global alignment between the two strings and
//! accepts the pair when its cost stays under a threshold.

use serde::{Deserialize, Serialize};

/// Weights of the alignment and the acceptance threshold.
///
/// The defaults (substitution 2, gap 1.5, threshold 4) are empirical. With
/// them, two edits of any kind are tolerated while three gaps are not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentCosts {
    /// Cost of aligning two different characters.
    pub substitution: f64,
    /// Cost of skipping a character on either side.
    pub gap: f64,
    /// A pair matches when its cost is strictly below this value.
    pub threshold: f64,
}

impl Default for AlignmentCosts {
    fn default() -> Self {
        Self {
            substitution: 2.0,
            gap: 1.5,
            threshold: 4.0,
        }
    }
}

/// Fuzzy matcher between a query token and candidate text.
///
/// # Examples
///
/// ```
/// use sustenance_query::Matcher;
///
/// let matcher = Matcher::default();
/// assert!(matcher.matches("POTATO", "potato"));
/// assert!(matcher.matches("potato", "potatoes"));
/// assert!(!matcher.matches("potato", "xyzxyzxyz"));
///
/// // Phrases match on the whole text or on any one word of it.
/// assert!(matcher.matches_phrase("night", "Late Night"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Matcher {
    costs: AlignmentCosts,
}

impl Matcher {
    /// Creates a matcher with custom weights.
    pub fn new(costs: AlignmentCosts) -> Self {
        Self { costs }
    }

    /// Returns the weights in use.
    pub fn costs(&self) -> &AlignmentCosts {
        &self.costs
    }

    /// Returns the minimum alignment cost between `query` and `candidate`.
    ///
    /// Both sides are compared case-insensitively. The query `"9"` is read as
    /// `"nine"` and `"10"` as `"ten"`; the candidate is never rewritten.
    pub fn alignment_cost(&self, query: &str, candidate: &str) -> f64 {
        let query: Vec<char> = normalize_query(query).to_lowercase().chars().collect();
        let candidate: Vec<char> = candidate.to_lowercase().chars().collect();

        let AlignmentCosts {
            substitution, gap, ..
        } = self.costs;
        let width = candidate.len() + 1;
        let mut cost = vec![0.0_f64; (query.len() + 1) * width];

        for i in 0..=query.len() {
            cost[i * width] = i as f64 * gap;
        }
        for j in 0..=candidate.len() {
            cost[j] = j as f64 * gap;
        }

        for i in 1..=query.len() {
            for j in 1..=candidate.len() {
                let mismatch = if query[i - 1] == candidate[j - 1] {
                    0.0
                } else {
                    substitution
                };
                let diagonal = cost[(i - 1) * width + (j - 1)] + mismatch;
                let up = cost[(i - 1) * width + j] + gap;
                let left = cost[i * width + (j - 1)] + gap;
                cost[i * width + j] = diagonal.min(up).min(left);
            }
        }

        cost[query.len() * width + candidate.len()]
    }

    /// Returns true if `query` approximately equals `candidate`.
    pub fn matches(&self, query: &str, candidate: &str) -> bool {
        self.alignment_cost(query, candidate) < self.costs.threshold
    }

    /// Returns true if `query` matches the whole phrase or any
    /// whitespace-separated word of it.
    ///
    /// This lets `"nine"` find `"Colleges Nine & Ten Dining Hall"`.
    pub fn matches_phrase(&self, query: &str, phrase: &str) -> bool {
        self.matches(query, phrase)
            || phrase
                .split_whitespace()
                .any(|word| self.matches(query, word))
    }
}

/// Matches with the default weights.
pub fn matches(query: &str, candidate: &str) -> bool {
    Matcher::default().matches(query, candidate)
}

/// College numbers as students type them.
fn normalize_query(query: &str) -> &str {
    match query {
        "9" => "nine",
        "10" => "ten",
        other => other,
    }
}
