//! Directory records and the [`Listing`] trait the pipeline reads them through.
//!
//! Every stage of the engine accesses records only through [`Listing`], so the
//! engine can run over any record type. [`Company`] is the record type of the
//! green-tech directory and implements the trait directly.

use serde::{Deserialize, Serialize};

/// Trait for records that can be searched, sorted and paginated.
///
/// Implementations expose a closed set of fields. Absent optional fields are
/// returned as `None`; the stages apply their own defaults (year `0`,
/// band ordinal `0`, no category).
///
/// # Example
///
/// ```
/// use greenery_seeker::Listing;
///
/// struct Vendor {
///     id: String,
///     name: String,
///     blurb: String,
/// }
///
/// impl Listing for Vendor {
///     fn listing_id(&self) -> &str {
///         &self.id
///     }
///
///     fn search_fields(&self) -> Vec<&str> {
///         vec![&self.name, &self.blurb]
///     }
///
///     fn category_id(&self) -> Option<&str> {
///         None
///     }
///
///     fn sort_name(&self) -> &str {
///         &self.name
///     }
///
///     fn founded_year(&self) -> Option<i32> {
///         None
///     }
///
///     fn employee_band(&self) -> Option<&str> {
///         None
///     }
/// }
/// ```
pub trait Listing {
    /// Opaque unique key of the record.
    fn listing_id(&self) -> &str;

    /// Text fields matched against the free-text search, in display order.
    ///
    /// Fields the record does not have are left out.
    fn search_fields(&self) -> Vec<&str>;

    /// Identifier of the category the record belongs to, if any.
    fn category_id(&self) -> Option<&str>;

    /// Value used by the name sort key.
    fn sort_name(&self) -> &str;

    /// Year of founding, used by the founded-year sort key.
    fn founded_year(&self) -> Option<i32>;

    /// Employee-count band tag, used by the employee-band sort key.
    fn employee_band(&self) -> Option<&str>;
}

/// Moderation status of a submitted listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Awaiting review.
    Pending,
    /// Visible in the directory.
    #[default]
    Approved,
    /// Turned down by a moderator.
    Rejected,
}

impl ListingStatus {
    /// Returns `true` if the listing may be shown in the directory.
    pub fn is_approved(self) -> bool {
        matches!(self, ListingStatus::Approved)
    }

    /// Returns the lowercase name of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            ListingStatus::Pending => "pending",
            ListingStatus::Approved => "approved",
            ListingStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The category row joined onto a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
    pub slug: String,
}

/// A directory category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// A company listed in the directory.
///
/// Field names follow the `companies` table; the joined category row is
/// serialized under `categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub headquarters_city: Option<String>,
    #[serde(default)]
    pub headquarters_country: Option<String>,
    #[serde(default)]
    pub founded_year: Option<i32>,
    #[serde(default)]
    pub employee_count: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub status: ListingStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, rename = "categories")]
    pub category: Option<CategoryRef>,
}

impl Company {
    /// Creates an approved company with only the required fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Company {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            website: None,
            category_id: None,
            headquarters_city: None,
            headquarters_country: None,
            founded_year: None,
            employee_count: None,
            logo_url: None,
            status: ListingStatus::Approved,
            created_at: String::new(),
            updated_at: String::new(),
            category: None,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the headquarters city and country.
    pub fn headquarters(mut self, city: impl Into<String>, country: impl Into<String>) -> Self {
        self.headquarters_city = Some(city.into());
        self.headquarters_country = Some(country.into());
        self
    }

    /// Assigns the company to a category.
    pub fn in_category(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = name.to_lowercase().replace(' ', "-");
        self.category_id = Some(id.into());
        self.category = Some(CategoryRef { name, slug });
        self
    }

    /// Sets the founding year.
    pub fn founded(mut self, year: i32) -> Self {
        self.founded_year = Some(year);
        self
    }

    /// Sets the employee-count band.
    pub fn employees(mut self, band: impl Into<String>) -> Self {
        self.employee_count = Some(band.into());
        self
    }

    /// Sets the moderation status.
    pub fn with_status(mut self, status: ListingStatus) -> Self {
        self.status = status;
        self
    }

    /// Name of the joined category, if any.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    /// `"City, Country"`, shown only when both parts are known.
    pub fn location(&self) -> Option<String> {
        match (&self.headquarters_city, &self.headquarters_country) {
            (Some(city), Some(country)) => Some(format!("{}, {}", city, country)),
            _ => None,
        }
    }
}

impl Listing for Company {
    fn listing_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.headquarters_city.as_deref());
        fields.extend(self.headquarters_country.as_deref());
        fields.extend(self.category_name());
        fields
    }

    fn category_id(&self) -> Option<&str> {
        self.category_id.as_deref()
    }

    fn sort_name(&self) -> &str {
        &self.name
    }

    fn founded_year(&self) -> Option<i32> {
        self.founded_year
    }

    fn employee_band(&self) -> Option<&str> {
        self.employee_count.as_deref()
    }
}
