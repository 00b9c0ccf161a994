//! View data for each command.
//!
//! Views are plain serializable structs: the templates in [`crate::render`]
//! read them in text modes and `--output json` prints them as they are.
//! Every displayed text field that the search can match is carried as a
//! list of [`HighlightSpan`]s.

use greenery_seeker::{
    category_counts, filter_categories, find_by_id, headline, highlight, Category, Company,
    HighlightSpan, PageControls, PageMeta, QueryResult, QueryState, SortOption,
};
use serde::Serialize;

use crate::source::DirectorySource;

pub const NO_COMPANIES: &str = "No companies found";
pub const ADJUST_FILTERS: &str =
    "Try adjusting your search terms or filters to find what you're looking for.";
pub const EMPTY_DIRECTORY: &str = "Be the first to add a green tech company to our directory!";
pub const NO_CATEGORIES: &str = "No categories found";

/// The loaded directory: one fetch of each table.
#[derive(Debug, Default)]
pub struct Directory {
    pub companies: Vec<Company>,
    pub categories: Vec<Category>,
    /// Fetch failures, already logged. Shown alongside the (empty) results.
    pub errors: Vec<String>,
}

impl Directory {
    pub fn load(source: &impl DirectorySource) -> Self {
        let companies = source.fetch_all_approved_records();
        let categories = source.fetch_categories();
        let errors = [companies.error.as_ref(), categories.error.as_ref()]
            .into_iter()
            .flatten()
            .map(|e| e.to_string())
            .collect();
        Directory {
            companies: companies.items,
            categories: categories.items,
            errors,
        }
    }

    /// Finds a category by id, slug or name (case-insensitive).
    pub fn resolve_category(&self, selector: &str) -> Option<&Category> {
        let selector = selector.trim();
        self.categories.iter().find(|c| c.id == selector).or_else(|| {
            self.categories.iter().find(|c| {
                c.slug.eq_ignore_ascii_case(selector) || c.name.eq_ignore_ascii_case(selector)
            })
        })
    }

    /// Resolves a category selector to an id, warning when nothing matches.
    ///
    /// An unknown selector is kept as given, so the listing comes back empty
    /// rather than silently unfiltered.
    pub fn category_id(&self, selector: &str) -> String {
        match self.resolve_category(selector) {
            Some(category) => category.id.clone(),
            None => {
                tracing::warn!(category = selector, "unknown category");
                selector.trim().to_string()
            }
        }
    }

    fn category_name(&self, id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }
}

/// The message shown in place of an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: &'static str,
}

/// One company card, its searchable fields split into highlight spans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyCard {
    pub id: String,
    pub name: Vec<HighlightSpan>,
    pub description: Vec<HighlightSpan>,
    pub category: Option<Vec<HighlightSpan>>,
    pub location: Option<Vec<HighlightSpan>>,
    pub founded_year: Option<i32>,
    pub employee_count: Option<String>,
    pub website: Option<String>,
}

impl CompanyCard {
    pub fn new(company: &Company, search: &str) -> Self {
        CompanyCard {
            id: company.id.clone(),
            name: highlight(&company.name, search),
            description: highlight(&company.description, search),
            category: company.category_name().map(|name| highlight(name, search)),
            location: company.location().map(|loc| highlight(&loc, search)),
            founded_year: company.founded_year,
            employee_count: company.employee_count.clone(),
            website: company.website.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortChoice {
    pub token: String,
    pub label: &'static str,
    pub selected: bool,
}

/// The companies listing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompaniesView {
    pub headline: String,
    pub search: String,
    pub category: Option<String>,
    pub sort: String,
    pub sort_label: &'static str,
    pub sort_options: Vec<SortChoice>,
    pub companies: Vec<CompanyCard>,
    pub meta: PageMeta,
    pub summary: String,
    pub paginated: bool,
    pub controls: PageControls,
    pub empty: Option<EmptyState>,
    pub errors: Vec<String>,
}

impl CompaniesView {
    pub fn new(directory: &Directory, state: &QueryState, result: &QueryResult<'_, Company>) -> Self {
        let empty = if result.items.is_empty() {
            Some(EmptyState {
                title: NO_COMPANIES,
                message: if result.total_records == 0 {
                    EMPTY_DIRECTORY
                } else {
                    ADJUST_FILTERS
                },
            })
        } else {
            None
        };

        CompaniesView {
            headline: headline(result.total_records, result.matched(), state),
            search: result.search.clone(),
            category: state.category().map(|id| {
                directory
                    .category_name(id)
                    .map_or_else(|| id.to_string(), str::to_string)
            }),
            sort: state.sort.to_string(),
            sort_label: state.sort.label(),
            sort_options: SortOption::ALL
                .iter()
                .map(|option| SortChoice {
                    token: option.to_string(),
                    label: option.label(),
                    selected: *option == state.sort,
                })
                .collect(),
            companies: result
                .items
                .iter()
                .map(|c| CompanyCard::new(c, &result.search))
                .collect(),
            meta: result.meta,
            summary: result.meta.summary(),
            paginated: result.meta.is_paginated(),
            controls: result.meta.controls(),
            empty,
            errors: directory.errors.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub id: String,
    pub slug: String,
    pub name: Vec<HighlightSpan>,
    pub description: Vec<HighlightSpan>,
    pub count: usize,
}

/// The category directory page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoriesView {
    pub search: String,
    pub categories: Vec<CategoryRow>,
    pub empty: Option<EmptyState>,
    pub errors: Vec<String>,
}

impl CategoriesView {
    pub fn new(directory: &Directory, search: &str) -> Self {
        let search = search.trim();
        let shown: Vec<Category> = filter_categories(&directory.categories, search)
            .into_iter()
            .cloned()
            .collect();
        let categories: Vec<CategoryRow> = category_counts(&directory.companies, &shown)
            .into_iter()
            .map(|row| CategoryRow {
                id: row.category.id.clone(),
                slug: row.category.slug.clone(),
                name: highlight(&row.category.name, search),
                description: highlight(&row.category.description, search),
                count: row.count,
            })
            .collect();

        let empty = categories.is_empty().then_some(EmptyState {
            title: NO_CATEGORIES,
            message: ADJUST_FILTERS,
        });

        CategoriesView {
            search: search.to_string(),
            categories,
            empty,
            errors: directory.errors.clone(),
        }
    }
}

/// The detail page of one company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub founded_year: Option<i32>,
    pub employee_count: Option<String>,
    pub website: Option<String>,
    pub status: String,
}

impl CompanyView {
    /// Looks up an approved company; `None` if the id is unknown.
    pub fn find(directory: &Directory, id: &str) -> Option<Self> {
        let company = find_by_id(&directory.companies, id.trim())?;
        Some(CompanyView {
            id: company.id.clone(),
            name: company.name.clone(),
            description: company.description.clone(),
            category: company.category_name().map(str::to_string),
            location: company.location(),
            founded_year: company.founded_year,
            employee_count: company.employee_count.clone(),
            website: company.website.clone(),
            status: company.status.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::tests::{snapshot_file, SNAPSHOT};
    use crate::source::SnapshotSource;
    use greenery_seeker::query;

    fn load() -> Directory {
        let file = snapshot_file(SNAPSHOT);
        Directory::load(&SnapshotSource::new(file.path()))
    }

    #[test]
    fn load_keeps_approved_rows_only() {
        let directory = load();
        assert_eq!(directory.companies.len(), 3);
        assert_eq!(directory.categories.len(), 2);
        assert!(directory.errors.is_empty());
    }

    #[test]
    fn load_failure_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let directory = Directory::load(&SnapshotSource::new(dir.path().join("missing.json")));
        assert!(directory.companies.is_empty());
        assert_eq!(directory.errors.len(), 2);

        let state = QueryState::new();
        let result = query(&directory.companies, &state);
        let view = CompaniesView::new(&directory, &state, &result);
        assert_eq!(
            view.empty,
            Some(EmptyState {
                title: NO_COMPANIES,
                message: EMPTY_DIRECTORY
            })
        );
    }

    #[test]
    fn categories_resolve_by_id_slug_or_name() {
        let directory = load();
        assert_eq!(directory.resolve_category("cat-solar").unwrap().name, "Solar Energy");
        assert_eq!(directory.resolve_category("wind-power").unwrap().id, "cat-wind");
        assert_eq!(directory.resolve_category("solar energy").unwrap().id, "cat-solar");
        assert!(directory.resolve_category("geothermal").is_none());
        assert_eq!(directory.category_id("geothermal"), "geothermal");
    }

    #[test]
    fn listing_view_highlights_every_searchable_field() {
        let directory = load();
        let state = QueryState::new().with_search("solar");
        let result = query(&directory.companies, &state);
        let view = CompaniesView::new(&directory, &state, &result);

        assert_eq!(view.headline, "Found 2 companies");
        assert_eq!(view.summary, "Showing 1 to 2 of 2");
        assert!(!view.paginated);
        assert_eq!(view.empty, None);

        let first = &view.companies[0];
        assert_eq!(
            first.name,
            vec![HighlightSpan::plain("First "), HighlightSpan::matched("Solar")]
        );
        assert_eq!(
            first.category,
            Some(vec![
                HighlightSpan::matched("Solar"),
                HighlightSpan::plain(" Energy")
            ])
        );
        assert_eq!(
            first.location,
            Some(vec![HighlightSpan::plain("Tempe, United States")])
        );

        let second = &view.companies[1];
        assert_eq!(second.id, "4");
        assert_eq!(second.category, None);
        assert_eq!(second.location, None);
    }

    #[test]
    fn listing_view_names_the_category_and_sort() {
        let directory = load();
        let state = QueryState::new()
            .with_category("cat-wind")
            .with_sort("founded_year-desc".parse().unwrap());
        let result = query(&directory.companies, &state);
        let view = CompaniesView::new(&directory, &state, &result);

        assert_eq!(view.category.as_deref(), Some("Wind Power"));
        assert_eq!(view.sort, "founded_year-desc");
        assert_eq!(view.sort_options.len(), 6);
        assert_eq!(view.sort_options.iter().filter(|o| o.selected).count(), 1);
    }

    #[test]
    fn no_match_suggests_adjusting_filters() {
        let directory = load();
        let state = QueryState::new().with_search("geothermal");
        let result = query(&directory.companies, &state);
        let view = CompaniesView::new(&directory, &state, &result);

        assert_eq!(view.headline, "Found 0 companies");
        assert_eq!(view.empty.unwrap().message, ADJUST_FILTERS);
    }

    #[test]
    fn categories_view_counts_approved_companies() {
        let directory = load();
        let view = CategoriesView::new(&directory, "");
        let counts: Vec<(String, usize)> = view
            .categories
            .iter()
            .map(|c| (c.id.clone(), c.count))
            .collect();
        // The pending solar company is not counted.
        assert_eq!(
            counts,
            vec![("cat-solar".to_string(), 1), ("cat-wind".to_string(), 1)]
        );

        let view = CategoriesView::new(&directory, "turbines");
        assert_eq!(view.categories.len(), 1);
        assert_eq!(view.categories[0].slug, "wind-power");

        let view = CategoriesView::new(&directory, "hydrogen");
        assert_eq!(view.empty.unwrap().title, NO_CATEGORIES);
    }

    #[test]
    fn detail_view_of_approved_company() {
        let directory = load();
        let view = CompanyView::find(&directory, "2").unwrap();
        assert_eq!(view.name, "Vestas Wind Systems");
        assert_eq!(view.location.as_deref(), Some("Aarhus, Denmark"));
        assert_eq!(view.status, "approved");

        assert!(CompanyView::find(&directory, "3").is_none());
        assert!(CompanyView::find(&directory, "99").is_none());
    }
}
