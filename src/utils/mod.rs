//! Utility functions for slug generation, URL validation and error translation.
//!
//! - [`slug_generator`] - Cryptographically random slug generation
//! - [`url_validator`] - Long URL validation with a loopback SSRF guard
//! - [`db_error`] - sqlx error classification

pub mod db_error;
pub mod slug_generator;
pub mod url_validator;
