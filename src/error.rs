//! Error types for the HomeFinder library

use thiserror::Error;

/// Main error type for HomeFinder operations
#[derive(Error, Debug)]
pub enum HomefinderError {
    /// Fixture file could not be read
    #[error("Failed to read fixture {path}: {source}")]
    FixtureIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Fixture file was not valid JSON for its record type
    #[error("Failed to parse fixture {name}: {source}")]
    FixtureParse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Key-value storage backend failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filter value that cannot be interpreted
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Inquiry rejected before submission
    #[error("Invalid inquiry: {0}")]
    InvalidInquiry(String),
}

/// Result type alias for HomeFinder operations
pub type Result<T> = std::result::Result<T, HomefinderError>;
