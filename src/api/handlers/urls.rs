//! Handlers for the `/api` endpoint.
//!
//! Every method takes the same JSON body, [`UrlRequest`], and addresses a
//! mapping by its long URL.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use tracing::{error, info, warn};
use validator::Validate;

use crate::api::dto::url::{UrlRequest, UrlResponse};
use crate::application::services::CreationStatus;
use crate::domain::error::ShortenError;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the live mapping for a long URL.
///
/// # Endpoint
///
/// `GET /api`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the URL has no live mapping.
pub async fn get_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<UrlRequest>,
) -> Result<Json<UrlResponse>, AppError> {
    payload.validate()?;

    let record = state
        .shortener
        .get_by_long_url(&payload.url)
        .await
        .map_err(log_failure)?;

    Ok(Json(record.into()))
}

/// Shortens a long URL.
///
/// # Endpoint
///
/// `POST /api`
///
/// # Response Codes
///
/// - **201 Created**: a new mapping was stored
/// - **200 OK**: the URL was already shortened; the existing mapping is returned
/// - **400 Bad Request**: malformed URL, unsupported scheme or loopback host
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "slug": "aB3_x-",
///   "long_url": "https://example.com/page",
///   "short_url": "http://localhost:8080/aB3_x-",
///   "created_at": "2024-03-01T12:00:00Z",
///   "updated_at": "2024-03-01T12:00:00Z",
///   "deleted_at": null
/// }
/// ```
pub async fn create_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<UrlRequest>,
) -> Result<(StatusCode, Json<UrlResponse>), AppError> {
    payload.validate()?;

    let (record, status) = state
        .shortener
        .shorten(&payload.url)
        .await
        .map_err(log_failure)?;

    let code = match status {
        CreationStatus::NewlyCreated => {
            info!("Shortened {} as {}", record.long_url, record.slug);
            StatusCode::CREATED
        }
        CreationStatus::AlreadyExists => StatusCode::OK,
    };

    Ok((code, Json(record.into())))
}

/// Points an existing mapping at `new_url`, keeping its slug.
///
/// # Endpoint
///
/// `PUT /api`
///
/// # Request Body
///
/// ```json
/// { "url": "https://old.example.com", "new_url": "https://new.example.com" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if `new_url` is missing or invalid
/// - 404 Not Found if `url` has no live mapping
/// - 409 Conflict if `new_url` is already shortened
pub async fn update_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<UrlRequest>,
) -> Result<Json<UrlResponse>, AppError> {
    payload.validate()?;

    let new_url = payload.new_url.as_deref().ok_or_else(|| {
        AppError::bad_request("new_url is required", json!({ "field": "new_url" }))
    })?;

    let record = state
        .shortener
        .update(&payload.url, new_url)
        .await
        .map_err(log_failure)?;

    info!("Updated {} to {}", payload.url, new_url);
    Ok(Json(record.into()))
}

/// Soft-deletes the mapping for a long URL.
///
/// # Endpoint
///
/// `DELETE /api`
///
/// # Response Codes
///
/// - **204 No Content**: deleted
/// - **404 Not Found**: no live mapping
pub async fn delete_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<UrlRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    state
        .shortener
        .delete(&payload.url)
        .await
        .map_err(log_failure)?;

    info!("Deleted mapping for {}", payload.url);
    Ok(StatusCode::NO_CONTENT)
}

/// Logs a core failure at the level matching who caused it.
fn log_failure(e: ShortenError) -> AppError {
    if e.is_validation() || matches!(e, ShortenError::NotFound | ShortenError::DuplicateLongUrl) {
        warn!("Rejected API request: {}", e);
    } else {
        error!("API request failed: {}", e);
    }
    e.into()
}
