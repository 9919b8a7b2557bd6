//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;
use tracing::{debug, error};

use crate::domain::error::ShortenError;
use crate::error::AppError;
use crate::state::AppState;

/// Anything that could have been produced by the slug generator.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("valid slug regex"));

/// Redirects a slug to its long URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Response Codes
///
/// - **303 See Other**: `Location` is the stored long URL
/// - **404 Not Found**: not a slug, unknown, or deleted
/// - **500 Internal Server Error**: storage failure
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    if !SLUG_REGEX.is_match(&slug) {
        debug!("Rejected non-slug path segment: {}", slug);
        return Err(not_found(&slug));
    }

    match state.shortener.get_by_slug(&slug).await {
        Ok(record) => {
            debug!("Redirecting {} to {}", slug, record.long_url);
            Ok(Redirect::to(&record.long_url))
        }
        Err(ShortenError::NotFound) => {
            debug!("Slug not found: {}", slug);
            Err(not_found(&slug))
        }
        Err(e) => {
            error!("Failed to resolve slug {}: {}", slug, e);
            Err(e.into())
        }
    }
}

fn not_found(slug: &str) -> AppError {
    AppError::not_found("Short URL not found", json!({ "slug": slug }))
}
