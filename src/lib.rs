//! HomeFinder: real-estate listing browser over bundled fixture data.

pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filters;
pub mod inquiry;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod store;
pub mod views;

pub use error::{HomefinderError, Result};
