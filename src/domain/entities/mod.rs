//! Core domain entities.
//!
//! - [`UrlMapping`] - The `{slug, short_url, long_url}` triple handed to storage
//! - [`UrlRecord`] - A stored mapping with lifecycle metadata

pub mod url_mapping;

pub use url_mapping::{UrlMapping, UrlRecord};
