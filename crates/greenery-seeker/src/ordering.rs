//! Sort stage: sort keys, directions and record comparison.
//!
//! Provides [`Dir`] for sort direction, [`SortKey`] for the field to sort by and
//! [`SortOption`] for the combined `"<key>-<dir>"` choice shown to users.
//!
//! Descending order is the ascending comparison reversed, never a separate
//! comparator, so `desc(a, b) == asc(a, b).reverse()` for every pair. The sort
//! is stable: records that compare equal keep their input order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::band::band_ordinal;
use crate::error::{Result, SeekerError};
use crate::record::Listing;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dir {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Dir::Asc),
            "desc" | "descending" => Ok(Dir::Desc),
            other => Err(SeekerError::UnknownDirection(other.to_string())),
        }
    }
}

/// Field a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Case-insensitive name order.
    #[default]
    #[serde(rename = "name")]
    Name,
    /// Founding year; a missing year counts as `0`.
    #[serde(rename = "founded_year")]
    FoundedYear,
    /// Employee band by ordinal; missing or unknown bands count as `0`.
    #[serde(rename = "employee_count")]
    EmployeeBand,
}

impl SortKey {
    /// Returns the token used for this key in sort options.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::FoundedYear => "founded_year",
            SortKey::EmployeeBand => "employee_count",
        }
    }

    /// Compares two records by this key in ascending order.
    pub fn compare<T: Listing>(self, a: &T, b: &T) -> Ordering {
        match self {
            SortKey::Name => compare_names(a.sort_name(), b.sort_name()),
            SortKey::FoundedYear => a
                .founded_year()
                .unwrap_or(0)
                .cmp(&b.founded_year().unwrap_or(0)),
            SortKey::EmployeeBand => {
                band_ordinal(a.employee_band()).cmp(&band_ordinal(b.employee_band()))
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "founded_year" | "founded-year" | "year" => Ok(SortKey::FoundedYear),
            "employee_count" | "employee-band" | "employee_band" | "employees" => {
                Ok(SortKey::EmployeeBand)
            }
            other => Err(SeekerError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Compares names without regard to case.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// A sort key paired with a direction.
///
/// Parses from and displays as `"<key>-<dir>"`, e.g. `"founded_year-desc"`.
///
/// # Example
///
/// ```
/// use greenery_seeker::{Dir, SortKey, SortOption};
///
/// let option: SortOption = "employee_count-desc".parse().unwrap();
/// assert_eq!(option.key, SortKey::EmployeeBand);
/// assert_eq!(option.dir, Dir::Desc);
/// assert_eq!(option.label(), "Largest First");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortOption {
    pub key: SortKey,
    pub dir: Dir,
}

impl SortOption {
    /// The options offered on the listing page, in menu order.
    pub const ALL: [SortOption; 6] = [
        SortOption::new(SortKey::Name, Dir::Asc),
        SortOption::new(SortKey::Name, Dir::Desc),
        SortOption::new(SortKey::FoundedYear, Dir::Desc),
        SortOption::new(SortKey::FoundedYear, Dir::Asc),
        SortOption::new(SortKey::EmployeeBand, Dir::Desc),
        SortOption::new(SortKey::EmployeeBand, Dir::Asc),
    ];

    /// Creates a sort option.
    pub const fn new(key: SortKey, dir: Dir) -> Self {
        SortOption { key, dir }
    }

    /// Human-readable menu label.
    pub fn label(self) -> &'static str {
        match (self.key, self.dir) {
            (SortKey::Name, Dir::Asc) => "Name (A-Z)",
            (SortKey::Name, Dir::Desc) => "Name (Z-A)",
            (SortKey::FoundedYear, Dir::Desc) => "Newest First",
            (SortKey::FoundedYear, Dir::Asc) => "Oldest First",
            (SortKey::EmployeeBand, Dir::Desc) => "Largest First",
            (SortKey::EmployeeBand, Dir::Asc) => "Smallest First",
        }
    }

    /// Compares two records by key, then applies the direction.
    pub fn compare<T: Listing>(self, a: &T, b: &T) -> Ordering {
        self.dir.apply(self.key.compare(a, b))
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.key, self.dir)
    }
}

impl FromStr for SortOption {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        let (key, dir) = s
            .trim()
            .rsplit_once('-')
            .ok_or_else(|| SeekerError::MalformedSortOption(s.to_string()))?;
        Ok(SortOption {
            key: key.parse()?,
            dir: dir.parse()?,
        })
    }
}

/// Returns the records ordered by the sort option.
///
/// The sort is stable and the input is left untouched.
pub fn sort<'a, T: Listing>(items: &[&'a T], option: SortOption) -> Vec<&'a T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| option.compare(*a, *b));
    sorted
}
