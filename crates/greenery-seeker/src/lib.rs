//! Greenery Seeker - Query engine for directory listings.
//!
//! Seeker takes an in-memory snapshot of directory records and produces the
//! page a listing view shows. It supports:
//!
//! - Free-text search across a record's text fields, combined with a category selector
//! - Sorting by name, founding year or employee band, ascending or descending
//! - Fixed-size pages with "showing X to Y of Z" metadata and a pagination bar
//! - Highlighting of the search in any displayed text
//!
//! # Quick Start
//!
//! ```rust
//! use greenery_seeker::{query, Company, QueryState, SortOption};
//!
//! let records = vec![
//!     Company::new("1", "Vestas Wind Systems")
//!         .description("Wind turbines")
//!         .employees("10000+"),
//!     Company::new("2", "First Solar")
//!         .description("Thin-film photovoltaics")
//!         .employees("5000-10000"),
//!     Company::new("3", "Helio Rooftops")
//!         .description("Residential solar installs")
//!         .employees("11-50"),
//! ];
//!
//! let state = QueryState::new()
//!     .with_search("solar")
//!     .with_sort("employee_count-desc".parse::<SortOption>().unwrap());
//!
//! let result = query(&records, &state);
//! assert_eq!(result.items.len(), 2);
//! assert_eq!(result.items[0].name, "First Solar");
//! assert_eq!(result.meta.summary(), "Showing 1 to 2 of 2");
//!
//! let spans = result.highlight(&result.items[0].name);
//! assert!(spans.iter().any(|s| s.is_match && s.text == "Solar"));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! snapshot ─▶ filter ─▶ sort ─▶ paginate ─▶ page
//!                                   └─▶ highlight (per displayed field)
//! ```
//!
//! Each stage is a pure function and never mutates the snapshot, so the
//! pipeline is simply re-run on every input change. [`Browser`] keeps the
//! session state needed for the page-reset rules.
//!
//! # Sort Keys
//!
//! | Key | Token | Order |
//! |-----|-------|-------|
//! | Name | `name` | Case-insensitive |
//! | Founded year | `founded_year` | Numeric, missing = 0 |
//! | Employee band | `employee_count` | By [`band_ordinal`], unknown = 0 |

mod band;
mod directory;
mod error;
mod filter;
mod highlight;
mod ordering;
mod paginate;
mod query;
mod record;
mod search;
mod state;

// Re-export public API
pub use band::{band_ordinal, EMPLOYEE_BANDS};
pub use directory::{category_counts, filter_categories, find_by_id, headline, CategoryCount};
pub use error::{Result, SeekerError};
pub use filter::{filter, matches};
pub use highlight::{highlight, HighlightSpan};
pub use ordering::{sort, Dir, SortKey, SortOption};
pub use paginate::{
    paginate, total_pages, Page, PageControls, PageMeta, ShrinkPolicy, DEFAULT_PAGE_SIZE,
    NUMBERED_PAGE_LINKS,
};
pub use query::{query, Browser, QueryResult};
pub use record::{Category, CategoryRef, Company, Listing, ListingStatus};
pub use state::QueryState;
