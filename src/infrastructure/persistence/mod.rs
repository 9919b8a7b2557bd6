//! Repository implementations.
//!
//! - [`SqliteUrlRepository`] - sqlx-backed storage used by the server
//! - [`InMemoryUrlRepository`] - mutex-guarded store for tests and local runs

pub mod memory_url_repository;
pub mod sqlite_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
pub use sqlite_url_repository::SqliteUrlRepository;
