//! API route configuration.

use crate::api::handlers::{
    create_url_handler, delete_url_handler, get_url_handler, update_url_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes.
///
/// # Endpoints
///
/// - `GET    /api` - Read the mapping for `url`
/// - `POST   /api` - Shorten `url`
/// - `PUT    /api` - Re-point `url` to `new_url`
/// - `DELETE /api` - Soft-delete the mapping for `url`
///
/// Any other method answers 405 Method Not Allowed.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/api",
        get(get_url_handler)
            .post(create_url_handler)
            .put(update_url_handler)
            .delete(delete_url_handler),
    )
}
