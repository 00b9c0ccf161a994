//! Data source trait connecting the directory store to the listing pipeline.
//!
//! [`DirectorySource`] is the fetch side of the directory: one call for the
//! approved companies and one for the categories. Fetches never fail across
//! this boundary. A failed fetch returns an empty list together with the
//! error, which is also logged, so the pipeline always runs over a list.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use greenery_seeker::{Category, Company};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while reading the directory store.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The snapshot could not be opened or read.
    #[error("cannot read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The snapshot is not valid JSON of the expected shape.
    #[error("malformed snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The result of one fetch: the rows, plus the error if the fetch failed.
#[derive(Debug)]
pub struct Fetched<T> {
    pub items: Vec<T>,
    pub error: Option<SourceError>,
}

impl<T> Fetched<T> {
    /// A successful fetch.
    pub fn ok(items: Vec<T>) -> Self {
        Fetched { items, error: None }
    }

    /// A failed fetch of `table`: no rows, the error kept and logged.
    pub fn failed(table: &str, error: SourceError) -> Self {
        tracing::error!(table, error = %error, "error fetching {}", table);
        Fetched {
            items: Vec::new(),
            error: Some(error),
        }
    }
}

/// Trait for stores that hold the directory.
///
/// Implementations are called once per page load or refresh.
pub trait DirectorySource {
    /// All approved companies, newest first.
    fn fetch_all_approved_records(&self) -> Fetched<Company>;

    /// All categories, ordered by name.
    fn fetch_categories(&self) -> Fetched<Category>;
}

#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    companies: Vec<Company>,
}

/// A directory exported to a JSON file.
///
/// The file holds the `categories` and `companies` tables:
///
/// ```json
/// {
///   "categories": [{ "id": "c1", "name": "Solar Energy", "slug": "solar-energy" }],
///   "companies": [{ "id": "1", "name": "First Solar", "category_id": "c1",
///                   "categories": { "name": "Solar Energy", "slug": "solar-energy" } }]
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Snapshot, SourceError> {
        let file = File::open(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| SourceError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl DirectorySource for SnapshotSource {
    fn fetch_all_approved_records(&self) -> Fetched<Company> {
        match self.load() {
            Ok(snapshot) => {
                let mut companies: Vec<Company> = snapshot
                    .companies
                    .into_iter()
                    .filter(|c| c.status.is_approved())
                    .collect();
                // RFC 3339 timestamps order lexicographically.
                companies.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                tracing::debug!(count = companies.len(), "fetched approved companies");
                Fetched::ok(companies)
            }
            Err(error) => Fetched::failed("companies", error),
        }
    }

    fn fetch_categories(&self) -> Fetched<Category> {
        match self.load() {
            Ok(snapshot) => {
                let mut categories = snapshot.categories;
                categories.sort_by(|a, b| a.name.cmp(&b.name));
                tracing::debug!(count = categories.len(), "fetched categories");
                Fetched::ok(categories)
            }
            Err(error) => Fetched::failed("categories", error),
        }
    }
}
