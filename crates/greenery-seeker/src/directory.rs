//! Directory helpers around the listing pipeline.
//!
//! The category directory, per-category counts, record lookup by id and the
//! listing headline.

use serde::Serialize;

use crate::record::{Category, Listing};
use crate::search::SearchMatcher;
use crate::state::QueryState;

/// A category together with the number of records filed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount<'a> {
    pub category: &'a Category,
    pub count: usize,
}

/// Returns the categories whose name or description contains `search`,
/// ignoring case. A blank search keeps every category.
pub fn filter_categories<'a>(categories: &'a [Category], search: &str) -> Vec<&'a Category> {
    let matcher = SearchMatcher::new(search);
    categories
        .iter()
        .filter(|c| matcher.is_match(&c.name) || matcher.is_match(&c.description))
        .collect()
}

/// Counts records per category, keeping the order of `categories`.
///
/// Categories with no records get a count of 0; records without a category
/// are not counted anywhere.
pub fn category_counts<'a, T: Listing>(
    records: &[T],
    categories: &'a [Category],
) -> Vec<CategoryCount<'a>> {
    categories
        .iter()
        .map(|category| CategoryCount {
            category,
            count: records
                .iter()
                .filter(|r| r.category_id() == Some(category.id.as_str()))
                .count(),
        })
        .collect()
}

/// Finds a record by its id.
pub fn find_by_id<'a, T: Listing>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|r| r.listing_id() == id)
}

/// The line above the listing.
///
/// # Example
///
/// ```
/// use greenery_seeker::{headline, QueryState};
///
/// assert_eq!(
///     headline(14, 14, &QueryState::new()),
///     "Discover 14+ companies driving sustainable innovation"
/// );
/// assert_eq!(
///     headline(14, 3, &QueryState::new().with_search("solar")),
///     "Found 3 companies"
/// );
/// ```
pub fn headline(total: usize, matched: usize, state: &QueryState) -> String {
    if state.has_filters() {
        format!("Found {} companies", matched)
    } else {
        format!("Discover {}+ companies driving sustainable innovation", total)
    }
}
