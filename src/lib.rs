//! # Slug Shortener
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - URL mapping entities, errors and the repository trait
//! - **Application Layer** ([`application`]) - Shortening logic and slug retry policy
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite and in-memory repositories
//! - **API Layer** ([`api`]) - JSON API, redirect and health handlers
//! - **Web Layer** ([`web`]) - HTML form for shortening from a browser
//!
//! ## Features
//!
//! - Random URL-safe slugs of configurable length
//! - Rejection of non-http(s) URLs and loopback targets
//! - One live short URL per long URL; re-shortening returns the existing one
//! - Soft delete with slugs that are never handed out again
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://url.db?mode=rwc"
//! export DOMAIN="http://localhost:8080/"
//!
//! # Migrations run automatically on startup
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CreationStatus, ShortenerService};
    pub use crate::domain::entities::{UrlMapping, UrlRecord};
    pub use crate::domain::error::ShortenError;
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
