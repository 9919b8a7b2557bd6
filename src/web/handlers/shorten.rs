//! Form submission handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::error::AppError;
use crate::state::AppState;
use super::form::FormTemplate;

/// Fields posted by `templates/form.html`.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: String,
}

/// Template for a successful shortening.
///
/// Renders `templates/result.html` with the short URL as a link.
#[derive(Template, WebTemplate)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub short_url: String,
    pub long_url: String,
}

/// Shortens the submitted URL and renders the result page.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Failure
///
/// Re-renders the form with the error message and the status code the JSON
/// API would return for the same failure (400 for invalid input, 500 for
/// storage or generation failures).
pub async fn shorten_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Response {
    let url = form.url.trim().to_string();

    match state.shortener.shorten(&url).await {
        Ok((record, _)) => {
            info!("Shortened {} as {} via form", record.long_url, record.slug);
            ResultTemplate {
                short_url: record.short_url,
                long_url: record.long_url,
            }
            .into_response()
        }
        Err(e) => {
            if e.is_validation() {
                warn!("Rejected form submission {}: {}", url, e);
            } else {
                error!("Form submission failed for {}: {}", url, e);
            }

            let err = AppError::from(e);
            let status = err.status_code();
            let page = FormTemplate {
                error: Some(err.to_string()),
                url,
            };
            (status, page).into_response()
        }
    }
}
