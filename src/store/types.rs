use crate::filters::PropertyFilters;
use crate::models::Property;
use std::time::Duration;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(600);

/// Delays applied before a recomputation is published
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreTiming {
    /// Quiet period required after the last input change
    pub debounce: Duration,
    /// Simulated backend round trip
    pub latency: Duration,
}

impl StoreTiming {
    pub fn immediate() -> Self {
        Self {
            debounce: Duration::ZERO,
            latency: Duration::ZERO,
        }
    }
}

impl Default for StoreTiming {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            latency: DEFAULT_LATENCY,
        }
    }
}

/// Last published listing result
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    /// Matching properties in fixture order
    pub properties: Vec<Property>,
    /// Filters the result was computed from
    pub filters: PropertyFilters,
    /// Search term the result was computed from
    pub search_term: String,
    /// A recomputation is scheduled and has not published yet
    pub loading: bool,
    /// Number of results published so far
    pub revision: u64,
    /// Request token of the published result
    pub token: u64,
}

impl FilteredView {
    pub(crate) fn unfiltered(properties: &[Property]) -> Self {
        Self {
            properties: properties.to_vec(),
            filters: PropertyFilters::default(),
            search_term: String::new(),
            loading: false,
            revision: 0,
            token: 0,
        }
    }
}
