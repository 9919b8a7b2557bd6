//! DTOs for the `/api` endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlRecord;

/// Request body shared by every `/api` method.
///
/// `url` names the long URL to read, create, update or delete. `new_url` is
/// only read by `PUT`.
#[derive(Debug, Deserialize, Validate)]
pub struct UrlRequest {
    #[validate(length(min = 1, max = 2048, message = "url must be 1-2048 characters"))]
    pub url: String,

    #[validate(length(min = 1, max = 2048, message = "new_url must be 1-2048 characters"))]
    pub new_url: Option<String>,
}

/// Stored mapping as returned by the API.
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub id: i64,
    pub slug: String,
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<UrlRecord> for UrlResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id,
            slug: record.slug,
            long_url: record.long_url,
            short_url: record.short_url,
            created_at: record.created_at,
            updated_at: record.updated_at,
            deleted_at: record.deleted_at,
        }
    }
}
