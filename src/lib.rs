//! che168 car listing scraper with title field extraction and a filterable catalog.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod extract;
pub mod models;
pub mod scrapers;
pub mod service;

pub use extract::structure;
pub use models::{Country, RawListing, StructuredListing};
