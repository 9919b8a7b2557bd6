//! Domain layer containing the URL mapping model, its error taxonomy and the
//! repository contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures ([`entities::UrlMapping`], [`entities::UrlRecord`])
//! - [`repositories`] - Storage trait definitions
//! - [`error`] - [`error::ShortenError`], the structured outcome of every core operation
//!
//! The domain layer has no dependencies on the HTTP layer.
//! Repository traits define contracts implemented by [`crate::infrastructure`].

pub mod entities;
pub mod error;
pub mod repositories;
