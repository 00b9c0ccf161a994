//! Filter stage: free-text search combined with a category selector.
//!
//! A record passes when both conditions hold:
//!
//! ```text
//! match = (search is blank ∨ some search field contains the search)
//!       ∧ (no category selected ∨ record category == selected category)
//! ```
//!
//! Text matching is a case-insensitive substring test on the trimmed search,
//! so `"sola"` matches `"Solar Energy"`. It uses the same matcher as the
//! highlight stage, so a kept record always has a highlighted field. The
//! stage keeps input order; ordering is the sort stage's job.

use crate::record::Listing;
use crate::search::SearchMatcher;

fn text_matches<T: Listing>(record: &T, matcher: &SearchMatcher) -> bool {
    matcher.is_blank()
        || record
            .search_fields()
            .iter()
            .any(|field| matcher.is_match(field))
}

fn category_matches<T: Listing>(record: &T, category: Option<&str>) -> bool {
    match category {
        None => true,
        Some(selected) => record.category_id() == Some(selected),
    }
}

/// Tests a single record against a search string and category selector.
///
/// # Example
///
/// ```
/// use greenery_seeker::{matches, Company};
///
/// let company = Company::new("1", "Helio")
///     .description("Rooftop panels")
///     .in_category("solar", "Solar Energy");
///
/// assert!(matches(&company, "  SOLA ", None));
/// assert!(matches(&company, "", Some("solar")));
/// assert!(!matches(&company, "panel", Some("wind")));
/// ```
pub fn matches<T: Listing>(record: &T, search: &str, category: Option<&str>) -> bool {
    let matcher = SearchMatcher::new(search);
    category_matches(record, category) && text_matches(record, &matcher)
}

/// Returns the records that match the search and category, in input order.
///
/// The input slice is never modified.
pub fn filter<'a, T: Listing>(records: &'a [T], search: &str, category: Option<&str>) -> Vec<&'a T> {
    let matcher = SearchMatcher::new(search);
    records
        .iter()
        .filter(|record| category_matches(*record, category))
        .filter(|record| text_matches(*record, &matcher))
        .collect()
}
