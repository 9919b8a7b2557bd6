//! Web form route configuration.

use crate::state::AppState;
use crate::web::handlers::{form_handler, shorten_handler, shorten_redirect_handler};
use axum::{Router, routing::get};

/// Browser-facing routes.
///
/// # Endpoints
///
/// - `GET  /app` - Shorten form
/// - `POST /shorten` - Form submission, renders the result page
/// - `GET  /shorten` - 303 redirect back to `/app`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/app", get(form_handler))
        .route("/shorten", get(shorten_redirect_handler).post(shorten_handler))
}
