//! Short URL generation and URL mapping management.

use std::sync::Arc;

use crate::domain::entities::{UrlMapping, UrlRecord};
use crate::domain::error::ShortenError;
use crate::domain::repositories::UrlRepository;
use crate::utils::slug_generator::{generate_slug, is_reserved_slug};
use crate::utils::url_validator::validate_url;

/// Number of fresh slugs tried before giving up with [`ShortenError::SlugExhausted`].
pub const MAX_SLUG_ATTEMPTS: usize = 5;

/// Slug used to probe storage health. Reserved, so it never maps to a record.
const HEALTH_PROBE_SLUG: &str = "health";

/// Whether [`ShortenerService::shorten`] stored a new mapping or found one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationStatus {
    NewlyCreated,
    AlreadyExists,
}

/// Service composing URL validation, slug generation and the repository.
///
/// The repository is injected as a trait object so callers can run the same
/// logic against SQLite, the in-memory store or a mock.
pub struct ShortenerService {
    repository: Arc<dyn UrlRepository>,
    domain: String,
    slug_length: usize,
}

impl ShortenerService {
    /// Creates a new service.
    ///
    /// `domain` is prepended verbatim to every slug, so it should end with `/`.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        domain: impl Into<String>,
        slug_length: usize,
    ) -> Self {
        Self {
            repository,
            domain: domain.into(),
            slug_length,
        }
    }

    /// Returns the configured short URL prefix.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Validates `long_url` and mints a fresh mapping for it.
    ///
    /// Nothing is persisted and storage is not consulted, so the slug may
    /// still collide with an existing one.
    ///
    /// # Errors
    ///
    /// Returns the validation error kinds from [`validate_url`], or the
    /// generation errors from [`generate_slug`].
    pub fn generate_short_url(&self, long_url: &str) -> Result<UrlMapping, ShortenError> {
        validate_url(long_url)?;
        self.mint(long_url)
    }

    fn mint(&self, long_url: &str) -> Result<UrlMapping, ShortenError> {
        let slug = generate_slug(self.slug_length)?;
        Ok(UrlMapping::new(&self.domain, slug, long_url.to_string()))
    }

    /// Shortens `long_url`, returning the stored record.
    ///
    /// # Re-shortening
    ///
    /// If a live mapping for the same long URL exists, it is returned with
    /// [`CreationStatus::AlreadyExists`] instead of creating a second one. This
    /// also covers losing a race against a concurrent request for the same URL.
    ///
    /// # Collisions
    ///
    /// A slug rejected by storage as a duplicate, or one equal to a reserved
    /// route segment, is discarded and a new one is drawn, up to
    /// [`MAX_SLUG_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// - Validation kinds for a rejected `long_url`
    /// - [`ShortenError::SlugExhausted`] when every attempt collided
    /// - [`ShortenError::Storage`] on database errors (not retried)
    pub async fn shorten(&self, long_url: &str) -> Result<(UrlRecord, CreationStatus), ShortenError> {
        validate_url(long_url)?;

        if let Some(existing) = self.repository.find_by_long_url(long_url).await? {
            return Ok((existing, CreationStatus::AlreadyExists));
        }

        for _ in 0..MAX_SLUG_ATTEMPTS {
            let mapping = self.mint(long_url)?;
            if is_reserved_slug(&mapping.slug) {
                continue;
            }

            let slug = mapping.slug.clone();
            match self.repository.create(mapping).await {
                Ok(()) => {
                    let record = self
                        .repository
                        .find_by_slug(&slug)
                        .await?
                        .ok_or(ShortenError::NotFound)?;
                    return Ok((record, CreationStatus::NewlyCreated));
                }
                Err(ShortenError::DuplicateSlug) => continue,
                Err(ShortenError::DuplicateLongUrl) => {
                    let existing = self
                        .repository
                        .find_by_long_url(long_url)
                        .await?
                        .ok_or(ShortenError::DuplicateLongUrl)?;
                    return Ok((existing, CreationStatus::AlreadyExists));
                }
                Err(e) => return Err(e),
            }
        }

        Err(ShortenError::SlugExhausted(MAX_SLUG_ATTEMPTS))
    }

    /// Looks up a live record by slug.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] if no live record has this slug.
    pub async fn get_by_slug(&self, slug: &str) -> Result<UrlRecord, ShortenError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or(ShortenError::NotFound)
    }

    /// Looks up a live record by long URL.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] if no live record holds this URL.
    pub async fn get_by_long_url(&self, long_url: &str) -> Result<UrlRecord, ShortenError> {
        self.repository
            .find_by_long_url(long_url)
            .await?
            .ok_or(ShortenError::NotFound)
    }

    /// Points an existing mapping at a new long URL and returns the updated record.
    ///
    /// The new URL goes through the same validation as a fresh one. Slug and
    /// short URL are kept.
    ///
    /// # Errors
    ///
    /// - Validation kinds for a rejected `new_long_url`
    /// - [`ShortenError::NotFound`] if `long_url` is not live
    /// - [`ShortenError::DuplicateLongUrl`] if `new_long_url` is already shortened
    pub async fn update(
        &self,
        long_url: &str,
        new_long_url: &str,
    ) -> Result<UrlRecord, ShortenError> {
        validate_url(new_long_url)?;

        self.repository.update(long_url, new_long_url).await?;
        self.get_by_long_url(new_long_url).await
    }

    /// Soft-deletes the mapping for `long_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] if no live record holds this URL.
    pub async fn delete(&self, long_url: &str) -> Result<(), ShortenError> {
        self.repository.delete(long_url).await
    }

    /// Performs a storage round-trip that never matches a record.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::Storage`] if the repository is unreachable.
    pub async fn check_storage(&self) -> Result<(), ShortenError> {
        self.repository.find_by_slug(HEALTH_PROBE_SLUG).await?;
        Ok(())
    }
}
