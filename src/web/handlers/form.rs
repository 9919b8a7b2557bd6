//! Shorten form page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Redirect};

/// Template for the shorten form.
///
/// Renders `templates/form.html`. `error` is set when a submission was
/// rejected, and `url` refills the input with what the user typed.
#[derive(Template, WebTemplate)]
#[template(path = "form.html")]
pub struct FormTemplate {
    pub error: Option<String>,
    pub url: String,
}

/// Renders an empty shorten form.
///
/// # Endpoint
///
/// `GET /app`
pub async fn form_handler() -> impl IntoResponse {
    FormTemplate {
        error: None,
        url: String::new(),
    }
}

/// Sends stray `GET /shorten` requests to the form.
///
/// # Endpoint
///
/// `GET /shorten` (303 See Other to `/app`)
pub async fn shorten_redirect_handler() -> Redirect {
    Redirect::to("/app")
}
