use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::HomefinderError;
use crate::models::ListingStatus;

/// Property type value that disables the type filter
pub const ANY_PROPERTY_TYPE: &str = "all";

pub const DEFAULT_PRICE_MIN: u64 = 0;
pub const DEFAULT_PRICE_MAX: u64 = 10_000_000;

/// Sale/rent restriction, or no restriction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Sale,
    Rent,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Sale => ListingStatus::Sale.as_str(),
            StatusFilter::Rent => ListingStatus::Rent.as_str(),
        }
    }

    pub fn admits(&self, status: ListingStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Sale => status == ListingStatus::Sale,
            StatusFilter::Rent => status == ListingStatus::Rent,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = HomefinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Ok(StatusFilter::All),
            other => other.parse::<ListingStatus>().map(|status| match status {
                ListingStatus::Sale => StatusFilter::Sale,
                ListingStatus::Rent => StatusFilter::Rent,
            }),
        }
    }
}

/// Active listing filters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilters {
    /// Substring matched against city, state or zip
    pub location: String,
    /// Inclusive lower price bound
    pub price_min: u64,
    /// Inclusive upper price bound
    pub price_max: u64,
    /// Exact property type, or `"all"`
    pub property_type: String,
    /// Minimum number of bedrooms
    pub bedrooms: Option<u32>,
    /// Minimum number of bathrooms
    pub bathrooms: Option<u32>,
    /// Minimum area in square feet
    pub area_min: Option<u32>,
    pub status: StatusFilter,
}

impl Default for PropertyFilters {
    fn default() -> Self {
        Self {
            location: String::new(),
            price_min: DEFAULT_PRICE_MIN,
            price_max: DEFAULT_PRICE_MAX,
            property_type: ANY_PROPERTY_TYPE.to_string(),
            bedrooms: None,
            bathrooms: None,
            area_min: None,
            status: StatusFilter::All,
        }
    }
}

impl PropertyFilters {
    /// Overwrite every field the patch carries, leave the rest alone
    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(min) = patch.price_min {
            self.price_min = min;
        }
        if let Some(max) = patch.price_max {
            self.price_max = max;
        }
        if let Some(property_type) = patch.property_type {
            self.property_type = property_type;
        }
        if let Some(bedrooms) = patch.bedrooms {
            self.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = patch.bathrooms {
            self.bathrooms = bathrooms;
        }
        if let Some(area_min) = patch.area_min {
            self.area_min = area_min;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Partial filter update.
///
/// `None` leaves a field untouched. The nullable thresholds take
/// `Some(None)` to clear them back to "any".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub location: Option<String>,
    pub price_min: Option<u64>,
    pub price_max: Option<u64>,
    pub property_type: Option<String>,
    pub bedrooms: Option<Option<u32>>,
    pub bathrooms: Option<Option<u32>>,
    pub area_min: Option<Option<u32>>,
    pub status: Option<StatusFilter>,
}

impl FilterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn price_range(mut self, min: u64, max: u64) -> Self {
        self.price_min = Some(min);
        self.price_max = Some(max);
        self
    }

    pub fn price_min(mut self, min: u64) -> Self {
        self.price_min = Some(min);
        self
    }

    pub fn price_max(mut self, max: u64) -> Self {
        self.price_max = Some(max);
        self
    }

    pub fn property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = Some(property_type.into());
        self
    }

    pub fn bedrooms(mut self, min: Option<u32>) -> Self {
        self.bedrooms = Some(min);
        self
    }

    pub fn bathrooms(mut self, min: Option<u32>) -> Self {
        self.bathrooms = Some(min);
        self
    }

    pub fn area_min(mut self, min: Option<u32>) -> Self {
        self.area_min = Some(min);
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_only_touches_patched_fields() {
        let mut filters = PropertyFilters::default();
        filters.merge(FilterPatch::new().status(StatusFilter::Rent).bedrooms(Some(2)));
        assert_eq!(filters.status, StatusFilter::Rent);
        assert_eq!(filters.bedrooms, Some(2));
        assert_eq!(filters.price_max, DEFAULT_PRICE_MAX);

        filters.merge(FilterPatch::new().bedrooms(None));
        assert_eq!(filters.bedrooms, None);
        assert_eq!(filters.status, StatusFilter::Rent);
    }

    #[test]
    fn parses_status_filter() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!("Rent".parse::<StatusFilter>().unwrap(), StatusFilter::Rent);
        assert_eq!(" sale ".parse::<StatusFilter>().unwrap(), StatusFilter::Sale);
        assert!("lease".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn status_filter_names_parse_back() {
        for status in [StatusFilter::All, StatusFilter::Sale, StatusFilter::Rent] {
            assert_eq!(status.as_str().parse::<StatusFilter>().unwrap(), status);
        }
    }

    #[test]
    fn empty_patch_is_noop() {
        let mut filters = PropertyFilters::default();
        let patch = FilterPatch::new();
        assert!(patch.is_empty());
        filters.merge(patch);
        assert!(filters.is_default());
    }
}
