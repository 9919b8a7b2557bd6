//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /{slug}`      - Short link redirect (303 See Other)
//! - `GET  /health`      - Health check
//! - `/api`              - JSON API keyed by long URL
//! - `/app`, `/shorten`  - HTML form and its submission target
//! - `/static/*`         - Static assets
//!
//! Static segments take precedence over `/{slug}`, so slugs equal to a route
//! name are never generated.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router with all routes and the tracing layer.
///
/// `static_dir` is served under `/static`.
pub fn router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/{slug}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::routes())
        .merge(web::routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] wrapped in trailing-slash
/// normalization.
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}
