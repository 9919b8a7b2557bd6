mod common;

use sqlx::SqlitePool;

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    common::create_test_url(&pool, "redir1", "https://example.com/target").await;
    let server = common::create_test_server(common::create_test_state(pool));

    let response = server.get("/redir1").await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    let server = common::create_test_server(common::create_test_state(pool));

    let response = server.get("/nope12").await;

    assert_eq!(response.status_code(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_redirect_deleted_url(pool: SqlitePool) {
    common::create_deleted_url(&pool, "gone12", "https://example.com/gone").await;
    let server = common::create_test_server(common::create_test_state(pool));

    let response = server.get("/gone12").await;

    assert_eq!(response.status_code(), 404);
}

#[sqlx::test]
async fn test_redirect_rejects_non_slug_segment(pool: SqlitePool) {
    let server = common::create_test_server(common::create_test_state(pool));

    let response = server.get("/not.a.slug").await;

    assert_eq!(response.status_code(), 404);
}

#[sqlx::test]
async fn test_redirect_after_update_follows_new_url(pool: SqlitePool) {
    common::create_test_url(&pool, "move12", "https://old.example.com").await;
    let server = common::create_test_server(common::create_test_state(pool));

    server
        .put("/api")
        .json(&serde_json::json!({
            "url": "https://old.example.com",
            "new_url": "https://new.example.com"
        }))
        .await
        .assert_status_ok();

    let response = server.get("/move12").await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "https://new.example.com");
}
