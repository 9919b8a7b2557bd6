//! In-memory implementation of the URL repository for tests and local runs.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::entities::{UrlMapping, UrlRecord};
use crate::domain::error::ShortenError;
use crate::domain::repositories::UrlRepository;

/// Mutex-guarded table of URL records.
///
/// Every read-modify-write runs under a single lock, which gives the same
/// uniqueness guarantees as the SQLite indexes: slugs and short URLs are never
/// reused, long URLs are unique among live records.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    inner: Mutex<Table>,
}

#[derive(Default)]
struct Table {
    records: Vec<UrlRecord>,
    next_id: i64,
}

impl Table {
    fn live_by_long_url(&mut self, long_url: &str) -> Option<&mut UrlRecord> {
        self.records
            .iter_mut()
            .find(|r| r.deleted_at.is_none() && r.long_url == long_url)
    }
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, mapping: UrlMapping) -> Result<(), ShortenError> {
        let mut table = self.inner.lock().await;

        if table
            .records
            .iter()
            .any(|r| r.slug == mapping.slug || r.short_url == mapping.short_url)
        {
            return Err(ShortenError::DuplicateSlug);
        }
        if table.live_by_long_url(&mapping.long_url).is_some() {
            return Err(ShortenError::DuplicateLongUrl);
        }

        table.next_id += 1;
        let now = Utc::now();
        let record = UrlRecord {
            id: table.next_id,
            slug: mapping.slug,
            short_url: mapping.short_url,
            long_url: mapping.long_url,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        table.records.push(record);

        Ok(())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlRecord>, ShortenError> {
        let table = self.inner.lock().await;
        Ok(table
            .records
            .iter()
            .find(|r| r.deleted_at.is_none() && r.slug == slug)
            .cloned())
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>, ShortenError> {
        let mut table = self.inner.lock().await;
        Ok(table.live_by_long_url(long_url).cloned())
    }

    async fn update(&self, long_url: &str, new_long_url: &str) -> Result<(), ShortenError> {
        let mut table = self.inner.lock().await;

        if table.live_by_long_url(long_url).is_none() {
            return Err(ShortenError::NotFound);
        }
        if long_url != new_long_url && table.live_by_long_url(new_long_url).is_some() {
            return Err(ShortenError::DuplicateLongUrl);
        }

        let record = table
            .live_by_long_url(long_url)
            .ok_or(ShortenError::NotFound)?;
        record.long_url = new_long_url.to_string();
        record.updated_at = Utc::now();

        Ok(())
    }

    async fn delete(&self, long_url: &str) -> Result<(), ShortenError> {
        let mut table = self.inner.lock().await;

        let record = table
            .live_by_long_url(long_url)
            .ok_or(ShortenError::NotFound)?;
        let now = Utc::now();
        record.deleted_at = Some(now);
        record.updated_at = now;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn mapping(slug: &str, long_url: &str) -> UrlMapping {
        UrlMapping::new("https://short.ly/", slug.to_string(), long_url.to_string())
    }

    #[tokio::test]
    async fn test_create_then_read_both_ways() {
        let repo = InMemoryUrlRepository::new();
        let m = mapping("abc123", "https://example.com/page");

        repo.create(m.clone()).await.unwrap();

        let by_slug = repo.find_by_slug("abc123").await.unwrap().unwrap();
        let by_long = repo
            .find_by_long_url("https://example.com/page")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(by_slug.mapping(), m);
        assert_eq!(by_long.mapping(), m);
        assert_eq!(by_slug.id, 1);
    }

    #[tokio::test]
    async fn test_unknown_slug_is_none() {
        let repo = InMemoryUrlRepository::new();
        assert!(repo.find_by_slug("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_long_url_keeps_first() {
        let repo = InMemoryUrlRepository::new();
        repo.create(mapping("first1", "https://example.com"))
            .await
            .unwrap();

        let result = repo.create(mapping("second", "https://example.com")).await;

        assert!(matches!(result, Err(ShortenError::DuplicateLongUrl)));
        let stored = repo
            .find_by_long_url("https://example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.slug, "first1");
    }

    #[tokio::test]
    async fn test_duplicate_slug() {
        let repo = InMemoryUrlRepository::new();
        repo.create(mapping("same12", "https://a.com")).await.unwrap();

        let result = repo.create(mapping("same12", "https://b.com")).await;

        assert!(matches!(result, Err(ShortenError::DuplicateSlug)));
    }

    #[tokio::test]
    async fn test_update_keeps_slug() {
        let repo = InMemoryUrlRepository::new();
        repo.create(mapping("keep12", "https://old.com")).await.unwrap();

        repo.update("https://old.com", "https://new.com")
            .await
            .unwrap();

        let record = repo
            .find_by_long_url("https://new.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.slug, "keep12");
        assert_eq!(record.short_url, "https://short.ly/keep12");
        assert!(repo.find_by_long_url("https://old.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryUrlRepository::new();
        let result = repo.update("https://missing.com", "https://new.com").await;
        assert!(matches!(result, Err(ShortenError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_onto_existing_long_url() {
        let repo = InMemoryUrlRepository::new();
        repo.create(mapping("aaaaaa", "https://a.com")).await.unwrap();
        repo.create(mapping("bbbbbb", "https://b.com")).await.unwrap();

        let result = repo.update("https://a.com", "https://b.com").await;

        assert!(matches!(result, Err(ShortenError::DuplicateLongUrl)));
    }

    #[tokio::test]
    async fn test_delete_then_read_and_delete_again() {
        let repo = InMemoryUrlRepository::new();
        repo.create(mapping("gone12", "https://example.com"))
            .await
            .unwrap();

        repo.delete("https://example.com").await.unwrap();

        assert!(repo
            .find_by_long_url("https://example.com")
            .await
            .unwrap()
            .is_none());
        assert!(repo.find_by_slug("gone12").await.unwrap().is_none());
        assert!(matches!(
            repo.delete("https://example.com").await,
            Err(ShortenError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_deleted_slug_is_never_reused() {
        let repo = InMemoryUrlRepository::new();
        repo.create(mapping("gone12", "https://example.com"))
            .await
            .unwrap();
        repo.delete("https://example.com").await.unwrap();

        let result = repo.create(mapping("gone12", "https://other.com")).await;

        assert!(matches!(result, Err(ShortenError::DuplicateSlug)));
    }

    #[tokio::test]
    async fn test_deleted_long_url_can_be_shortened_again() {
        let repo = InMemoryUrlRepository::new();
        repo.create(mapping("old123", "https://example.com"))
            .await
            .unwrap();
        repo.delete("https://example.com").await.unwrap();

        repo.create(mapping("new123", "https://example.com"))
            .await
            .unwrap();

        let record = repo
            .find_by_long_url("https://example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.slug, "new123");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_have_one_winner() {
        let repo = Arc::new(InMemoryUrlRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.create(mapping(&format!("slug{i:02}"), "https://race.com"))
                        .await
                })
            })
            .collect();

        let mut winners = 0;
        let mut losers = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => winners += 1,
                Err(ShortenError::DuplicateLongUrl) => losers += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(losers, 15);
    }
}
