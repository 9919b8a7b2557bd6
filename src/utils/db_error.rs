//! Translation of sqlx errors into the domain error taxonomy.

use crate::domain::error::ShortenError;

/// Maps a write error to [`ShortenError`], classifying unique violations by
/// the column that caused them.
///
/// A violation on `long_url` becomes [`ShortenError::DuplicateLongUrl`]; one on
/// `slug` or `short_url` becomes [`ShortenError::DuplicateSlug`]. Anything else
/// is an opaque [`ShortenError::Storage`] error.
pub fn map_write_error(e: sqlx::Error) -> ShortenError {
    if let Some(db_err) = e.as_database_error()
        && db_err.is_unique_violation()
    {
        // SQLite does not report constraint names, only "UNIQUE constraint failed: urls.<col>".
        let target = db_err.constraint().unwrap_or_else(|| db_err.message());

        return if target.contains("long_url") {
            ShortenError::DuplicateLongUrl
        } else {
            ShortenError::DuplicateSlug
        };
    }

    ShortenError::Storage(e)
}
