//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{UrlMapping, UrlRecord};
use crate::domain::error::ShortenError;
use crate::domain::repositories::UrlRepository;
use crate::utils::db_error::map_write_error;

/// SQLite repository for URL mappings.
///
/// Uniqueness is enforced by the unique indexes created in `migrations/`, so
/// concurrent inserts are resolved by the database rather than by a
/// check-then-insert in application code.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    slug: String,
    short_url: String,
    long_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        Self {
            id: row.id,
            slug: row.slug,
            short_url: row.short_url,
            long_url: row.long_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn create(&self, mapping: UrlMapping) -> Result<(), ShortenError> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO urls (slug, short_url, long_url, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&mapping.slug)
        .bind(&mapping.short_url)
        .bind(&mapping.long_url)
        .bind(now)
        .bind(now)
        .execute(self.pool.as_ref())
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlRecord>, ShortenError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, slug, short_url, long_url, created_at, updated_at, deleted_at
            FROM urls
            WHERE slug = ? AND deleted_at IS NULL
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>, ShortenError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, slug, short_url, long_url, created_at, updated_at, deleted_at
            FROM urls
            WHERE long_url = ? AND deleted_at IS NULL
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn update(&self, long_url: &str, new_long_url: &str) -> Result<(), ShortenError> {
        let result = sqlx::query(
            r#"
            UPDATE urls
            SET long_url = ?, updated_at = ?
            WHERE long_url = ? AND deleted_at IS NULL
            "#,
        )
        .bind(new_long_url)
        .bind(Utc::now())
        .bind(long_url)
        .execute(self.pool.as_ref())
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(ShortenError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, long_url: &str) -> Result<(), ShortenError> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE urls
            SET deleted_at = ?, updated_at = ?
            WHERE long_url = ? AND deleted_at IS NULL
            "#,
        )
        .bind(now)
        .bind(now)
        .bind(long_url)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(ShortenError::NotFound);
        }

        Ok(())
    }
}
