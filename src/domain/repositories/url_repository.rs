//! Repository trait for URL mapping storage.

use crate::domain::entities::{UrlMapping, UrlRecord};
use crate::domain::error::ShortenError;
use async_trait::async_trait;

/// Capability set for durable, unique-keyed URL mapping storage.
///
/// Only live (not soft-deleted) records are visible through lookups. Uniqueness
/// of `slug` and `long_url` must be enforced atomically by the implementation:
/// a `create` racing another `create` for the same long URL has exactly one
/// winner, the other observes [`ShortenError::DuplicateLongUrl`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite via sqlx
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - mutex-guarded map for tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new mapping.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::DuplicateSlug`] if the slug or short URL is taken
    /// - [`ShortenError::DuplicateLongUrl`] if a live record already holds the long URL
    /// - [`ShortenError::Storage`] on database errors
    async fn create(&self, mapping: UrlMapping) -> Result<(), ShortenError>;

    /// Finds a live record by slug. `Ok(None)` means not found.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlRecord>, ShortenError>;

    /// Finds a live record by its original long URL. `Ok(None)` means not found.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>, ShortenError>;

    /// Rewrites the long URL of a live record, leaving slug and short URL untouched.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::NotFound`] if no live record holds `long_url`
    /// - [`ShortenError::DuplicateLongUrl`] if `new_long_url` belongs to another live record
    async fn update(&self, long_url: &str, new_long_url: &str) -> Result<(), ShortenError>;

    /// Soft-deletes the live record holding `long_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] if no live record matches.
    async fn delete(&self, long_url: &str) -> Result<(), ShortenError>;
}
