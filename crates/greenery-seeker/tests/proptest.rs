//! Property-based tests for seeker using proptest.

use greenery_seeker::{
    filter, highlight, paginate, query, sort, total_pages, Company, Dir, Listing, QueryState,
    SortKey, SortOption, EMPLOYEE_BANDS,
};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

const CATEGORIES: [&str; 3] = ["solar", "wind", "water"];

// Strategy to generate companies with a small alphabet so searches hit often
fn company_strategy() -> impl Strategy<Value = Company> {
    (
        "[a-cA-C ]{1,8}",
        "[a-cA-C ]{0,12}",
        prop::option::of("[a-c]{1,5}"),
        prop::option::of("[a-cA-C]{1,5}"),
        prop::option::of(0usize..3),
        prop::option::of(1800i32..2025),
        prop::option::of(prop::sample::select(
            EMPLOYEE_BANDS.iter().map(|(b, _)| *b).collect::<Vec<_>>(),
        )),
    )
        .prop_map(|(name, description, city, country, category, year, band)| {
            let mut company = Company::new(name.clone(), name).description(description);
            company.headquarters_city = city;
            company.headquarters_country = country;
            if let Some(i) = category {
                company = company.in_category(CATEGORIES[i], CATEGORIES[i]);
            }
            company.founded_year = year;
            company.employee_count = band.map(str::to_string);
            company
        })
}

// Letters whose case folding differs between simple and full folding rules
fn folding_company() -> impl Strategy<Value = Company> {
    (
        "[aiIİıſsSkK\u{212A} ]{1,8}",
        "[aiIİıſsSkK\u{212A} ]{0,8}",
        prop::option::of("[aiIİıſsSkK\u{212A}]{1,5}"),
    )
        .prop_map(|(name, description, country)| {
            let mut company = Company::new("1", name).description(description);
            company.headquarters_country = country;
            company
        })
}

fn companies() -> impl Strategy<Value = Vec<Company>> {
    prop::collection::vec(company_strategy(), 0..40)
}

fn category_strategy() -> impl Strategy<Value = Option<&'static str>> {
    prop::option::of(prop::sample::select(CATEGORIES.to_vec()))
}

fn key_strategy() -> impl Strategy<Value = SortKey> {
    prop::sample::select(vec![SortKey::Name, SortKey::FoundedYear, SortKey::EmployeeBand])
}

fn ids(items: &[&Company]) -> Vec<String> {
    items.iter().map(|c| c.id.clone()).collect()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Filter should never return more items than the input.
    #[test]
    fn filter_never_grows_collection(
        records in companies(),
        search in "[a-c ]{0,3}",
        category in category_strategy(),
    ) {
        let results = filter(&records, &search, category);
        prop_assert!(results.len() <= records.len());
    }

    /// Filtering a filtered list again changes nothing.
    #[test]
    fn filter_is_idempotent(
        records in companies(),
        search in "[a-c ]{0,3}",
        category in category_strategy(),
    ) {
        let once: Vec<Company> = filter(&records, &search, category)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter(&once, &search, category);
        prop_assert_eq!(ids(&twice), once.iter().map(|c| c.id.clone()).collect::<Vec<_>>());
    }

    /// A record is kept exactly when the folded search is inside one of its fields.
    #[test]
    fn filter_is_substring_match(
        records in companies(),
        search in "[a-cA-C ]{0,3}",
    ) {
        let needle = search.trim().to_lowercase();
        let kept = filter(&records, &search, None);

        let expected: Vec<&Company> = records
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || r.search_fields().iter().any(|f| f.to_lowercase().contains(&needle))
            })
            .collect();
        prop_assert_eq!(ids(&kept), ids(&expected));
    }

    /// The filter keeps a record exactly when one of its fields has a
    /// highlighted match, including for non-ASCII case folding.
    #[test]
    fn filter_agrees_with_highlight(
        company in folding_company(),
        search in "[aiIİıſsSkK\u{212A} ]{1,3}",
    ) {
        prop_assume!(!search.trim().is_empty());
        let kept = !filter(std::slice::from_ref(&company), &search, None).is_empty();
        let highlighted = company
            .search_fields()
            .iter()
            .any(|field| highlight(field, &search).iter().any(|s| s.is_match));
        prop_assert_eq!(kept, highlighted);
    }

    /// Sorting a sorted list again changes nothing.
    #[test]
    fn sort_is_idempotent(records in companies(), key in key_strategy()) {
        let refs: Vec<&Company> = records.iter().collect();
        let option = SortOption::new(key, Dir::Asc);

        let once = sort(&refs, option);
        let twice = sort(&once, option);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    /// Sorting is a permutation ordered by the key.
    #[test]
    fn sort_orders_every_adjacent_pair(
        records in companies(),
        key in key_strategy(),
        desc in any::<bool>(),
    ) {
        let refs: Vec<&Company> = records.iter().collect();
        let option = SortOption::new(key, if desc { Dir::Desc } else { Dir::Asc });
        let sorted = sort(&refs, option);

        prop_assert_eq!(sorted.len(), refs.len());
        for pair in sorted.windows(2) {
            prop_assert!(option.compare(pair[0], pair[1]) != std::cmp::Ordering::Greater);
        }
    }

    /// With distinct keys, descending is the exact reverse of ascending.
    #[test]
    fn descending_reverses_ascending_for_distinct_years(
        years in prop::collection::hash_set(1800i32..2025, 0..30),
    ) {
        let records: Vec<Company> = years
            .iter()
            .map(|y| Company::new(y.to_string(), "same").founded(*y))
            .collect();
        let refs: Vec<&Company> = records.iter().collect();

        let asc = sort(&refs, SortOption::new(SortKey::FoundedYear, Dir::Asc));
        let mut desc = sort(&refs, SortOption::new(SortKey::FoundedYear, Dir::Desc));
        desc.reverse();
        prop_assert_eq!(ids(&asc), ids(&desc));
    }

    /// Records with equal keys keep their input order in both directions.
    #[test]
    fn ties_keep_input_order(records in companies(), desc in any::<bool>()) {
        let refs: Vec<&Company> = records.iter().collect();
        let dir = if desc { Dir::Desc } else { Dir::Asc };
        let sorted = sort(&refs, SortOption::new(SortKey::EmployeeBand, dir));

        let position = |c: &Company| records.iter().position(|r| std::ptr::eq(r, c));
        for pair in sorted.windows(2) {
            if SortKey::EmployeeBand.compare(pair[0], pair[1]) == std::cmp::Ordering::Equal {
                prop_assert!(position(pair[0]) < position(pair[1]));
            }
        }
    }

    /// Walking every page visits every item once, in order.
    #[test]
    fn pages_partition_the_list(
        items in prop::collection::vec(any::<i64>(), 0..100),
        page_size in 1usize..20,
    ) {
        let refs: Vec<&i64> = items.iter().collect();
        let pages = total_pages(items.len(), page_size);
        prop_assert_eq!(pages, items.len().div_ceil(page_size).max(1));

        let mut walked: Vec<&i64> = Vec::new();
        for page in 1..=pages {
            let window = paginate(&refs, page_size, page);
            prop_assert_eq!(window.meta.page, page);
            prop_assert!(window.items.len() <= page_size);
            walked.extend(window.items);
        }
        prop_assert_eq!(walked, refs);
    }

    /// The resolved page always lies within [1, total_pages].
    #[test]
    fn resolved_page_is_in_range(
        records in companies(),
        page in 0usize..20,
        page_size in 1usize..10,
    ) {
        let state = QueryState::new().with_page_size(page_size).with_page(page);
        let result = query(&records, &state);
        prop_assert!(result.meta.page >= 1);
        prop_assert!(result.meta.page <= result.meta.total_pages);
        prop_assert!(result.items.len() <= page_size);
    }

    /// Highlight spans rebuild the input text.
    #[test]
    fn highlight_covers_the_text(text in ".{0,40}", search in ".{0,5}") {
        let spans = highlight(&text, &search);
        let rebuilt: String = spans.iter().map(|s| s.text.as_str()).collect();
        prop_assert_eq!(rebuilt, text);
    }

    /// Matched spans equal the search, ignoring case.
    #[test]
    fn highlight_matches_equal_the_search(text in "[a-cA-C .()*]{0,30}", search in "[a-c.()*]{1,3}") {
        for span in highlight(&text, &search).iter().filter(|s| s.is_match) {
            prop_assert_eq!(span.text.to_lowercase(), search.trim().to_lowercase());
        }
    }

    /// A blank search always gives a single plain span.
    #[test]
    fn blank_search_is_one_span(text in ".{0,40}", blanks in "[ \t]{0,3}") {
        let spans = highlight(&text, &blanks);
        prop_assert_eq!(spans.len(), 1);
        prop_assert!(!spans[0].is_match);
    }
}
