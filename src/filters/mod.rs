//! Listing filter pipeline.
//!
//! Stages run in a fixed order (search, location, price, type, thresholds,
//! status) and are conjunctive. Survivors keep the order of the input slice.

pub mod types;

pub use types::{FilterPatch, PropertyFilters, StatusFilter, ANY_PROPERTY_TYPE};

use crate::models::Property;

/// Case-insensitive free-text match over title and location fields
pub fn matches_search(property: &Property, term: &str) -> bool {
    let term = term.to_lowercase();
    if term.is_empty() {
        return true;
    }
    [
        property.title.as_str(),
        property.location.city.as_str(),
        property.location.state.as_str(),
        property.location.address.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&term))
}

/// City/state substring (case-insensitive) or zip substring
pub fn matches_location(property: &Property, location: &str) -> bool {
    let needle = location.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    property.location.city.to_lowercase().contains(&needle)
        || property.location.state.to_lowercase().contains(&needle)
        || property.location.zip.contains(&needle)
}

pub fn matches_price(property: &Property, filters: &PropertyFilters) -> bool {
    property.price >= filters.price_min && property.price <= filters.price_max
}

pub fn matches_type(property: &Property, property_type: &str) -> bool {
    property_type.eq_ignore_ascii_case(ANY_PROPERTY_TYPE)
        || property.property_type.eq_ignore_ascii_case(property_type)
}

pub fn matches_thresholds(property: &Property, filters: &PropertyFilters) -> bool {
    filters.bedrooms.map_or(true, |min| property.bedrooms >= min)
        && filters.bathrooms.map_or(true, |min| property.bathrooms >= min)
        && filters.area_min.map_or(true, |min| property.area >= min)
}

/// Every active predicate at once
pub fn matches(property: &Property, filters: &PropertyFilters, search_term: &str) -> bool {
    matches_search(property, search_term)
        && matches_location(property, &filters.location)
        && matches_price(property, filters)
        && matches_type(property, &filters.property_type)
        && matches_thresholds(property, filters)
        && filters.status.admits(property.status)
}

/// Filtered copy of `properties`, in input order
pub fn apply(properties: &[Property], filters: &PropertyFilters, search_term: &str) -> Vec<Property> {
    properties
        .iter()
        .filter(|p| matches(p, filters, search_term))
        .cloned()
        .collect()
}
