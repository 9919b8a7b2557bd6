//! HTML template rendering handlers.

mod form;
mod shorten;

pub use form::{FormTemplate, form_handler, shorten_redirect_handler};
pub use shorten::{ResultTemplate, ShortenForm, shorten_handler};
