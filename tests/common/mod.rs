#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Utc;
use slug_shortener::application::services::ShortenerService;
use slug_shortener::domain::repositories::UrlRepository;
use slug_shortener::infrastructure::persistence::{InMemoryUrlRepository, SqliteUrlRepository};
use slug_shortener::routes::router;
use slug_shortener::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const TEST_DOMAIN: &str = "https://short.ly/";
pub const TEST_SLUG_LENGTH: usize = 6;

pub async fn create_test_url(pool: &SqlitePool, slug: &str, long_url: &str) {
    let now = Utc::now();
    sqlx::query(
        "INSERT INTO urls (slug, short_url, long_url, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(slug)
    .bind(format!("{TEST_DOMAIN}{slug}"))
    .bind(long_url)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_deleted_url(pool: &SqlitePool, slug: &str, long_url: &str) {
    let now = Utc::now();
    sqlx::query(
        "INSERT INTO urls (slug, short_url, long_url, created_at, updated_at, deleted_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(slug)
    .bind(format!("{TEST_DOMAIN}{slug}"))
    .bind(long_url)
    .bind(now)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();
}

pub fn create_state_with(repository: Arc<dyn UrlRepository>) -> AppState {
    let shortener = ShortenerService::new(repository, TEST_DOMAIN, TEST_SLUG_LENGTH);
    AppState::new(Arc::new(shortener))
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    create_state_with(Arc::new(SqliteUrlRepository::new(Arc::new(pool))))
}

pub fn create_memory_state() -> AppState {
    create_state_with(Arc::new(InMemoryUrlRepository::new()))
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state, "static")).unwrap()
}
