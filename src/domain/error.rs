//! Error taxonomy shared by the slug generator, URL validator and repositories.

use thiserror::Error;

/// Structured outcome of a failed shortening, lookup or persistence operation.
///
/// The core returns these without logging; the HTTP boundary decides on status
/// codes and user-visible messages (see [`crate::error::AppError`]).
#[derive(Debug, Error)]
pub enum ShortenError {
    #[error("Malformed URL: {0}")]
    MalformedUrl(String),

    #[error("Unsupported URL scheme '{0}', only http and https are allowed")]
    UnsupportedScheme(String),

    #[error("URL host '{0}' is not allowed")]
    DisallowedHost(String),

    #[error("Slug already exists")]
    DuplicateSlug,

    #[error("Long URL is already shortened")]
    DuplicateLongUrl,

    #[error("Failed to generate a unique slug after {0} attempts")]
    SlugExhausted(usize),

    #[error("Slug length must be between 1 and {max}, got {0}", max = crate::utils::slug_generator::MAX_SLUG_LENGTH)]
    InvalidSlugLength(usize),

    #[error("Failed to read random bytes: {0}")]
    Entropy(String),

    #[error("URL not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl From<url::ParseError> for ShortenError {
    fn from(e: url::ParseError) -> Self {
        Self::MalformedUrl(e.to_string())
    }
}

impl ShortenError {
    /// Stable machine-readable identifier, used in API error details.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedUrl(_) => "malformed_url",
            Self::UnsupportedScheme(_) => "unsupported_scheme",
            Self::DisallowedHost(_) => "disallowed_host",
            Self::DuplicateSlug => "duplicate_slug",
            Self::DuplicateLongUrl => "duplicate_long_url",
            Self::SlugExhausted(_) => "slug_exhausted",
            Self::InvalidSlugLength(_) => "invalid_slug_length",
            Self::Entropy(_) => "entropy",
            Self::NotFound => "not_found",
            Self::Storage(_) => "storage",
        }
    }

    /// Returns true for errors caused by the caller's input URL.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MalformedUrl(_) | Self::UnsupportedScheme(_) | Self::DisallowedHost(_)
        )
    }
}
