//! URL mapping entities: the value minted by the generator and the stored record.

use chrono::{DateTime, Utc};

/// Mapping between a slug, its fully qualified short URL and the original long URL.
///
/// Produced by [`crate::application::services::ShortenerService::generate_short_url`]
/// and handed to [`crate::domain::repositories::UrlRepository::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub slug: String,
    pub short_url: String,
    pub long_url: String,
}

impl UrlMapping {
    /// Builds a mapping whose short URL is `domain + slug`.
    pub fn new(domain: &str, slug: String, long_url: String) -> Self {
        Self {
            short_url: format!("{domain}{slug}"),
            slug,
            long_url,
        }
    }
}

/// A persisted URL mapping with repository-owned lifecycle metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub slug: String,
    pub short_url: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl UrlRecord {
    /// Returns true if the record has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Projects the record back onto the mapping it was created from.
    pub fn mapping(&self) -> UrlMapping {
        UrlMapping {
            slug: self.slug.clone(),
            short_url: self.short_url.clone(),
            long_url: self.long_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(deleted_at: Option<DateTime<Utc>>) -> UrlRecord {
        let now = Utc::now();
        UrlRecord {
            id: 1,
            slug: "abc123".to_string(),
            short_url: "https://short.ly/abc123".to_string(),
            long_url: "https://example.com/page".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at,
        }
    }

    #[test]
    fn test_mapping_composes_short_url() {
        let mapping = UrlMapping::new(
            "https://short.ly/",
            "abc123".to_string(),
            "https://example.com/page".to_string(),
        );

        assert_eq!(mapping.slug, "abc123");
        assert_eq!(mapping.short_url, "https://short.ly/abc123");
        assert_eq!(mapping.long_url, "https://example.com/page");
    }

    #[test]
    fn test_record_projects_mapping() {
        let record = record(None);
        let mapping = record.mapping();

        assert_eq!(mapping.slug, record.slug);
        assert_eq!(mapping.short_url, record.short_url);
        assert_eq!(mapping.long_url, record.long_url);
    }

    #[test]
    fn test_record_is_deleted() {
        assert!(!record(None).is_deleted());
        assert!(record(Some(Utc::now())).is_deleted());
    }
}
