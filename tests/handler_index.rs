mod common;

use axum::http::header;

#[tokio::test]
async fn test_index_empty_state() {
    let pool = common::test_pool().await;
    let server = common::open_server(pool);

    let response = server.get("/").await;

    response.assert_status_ok();
    let content_type = response.header(header::CONTENT_TYPE);
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
    assert!(response.text().contains("No links yet"));
}

#[tokio::test]
async fn test_index_lists_links_newest_first() {
    let pool = common::test_pool().await;
    common::insert_link_at(&pool, "older", "https://older.example.com", "2025-02-01 12:00:00.000").await;
    common::insert_link_at(&pool, "newer", "https://newer.example.com", "2026-02-01 12:00:00.000").await;
    let server = common::open_server(pool);

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    let newer = html.find("go/newer").unwrap();
    let older = html.find("go/older").unwrap();
    assert!(newer < older);
    assert!(html.contains(r#"<span class="count">2</span>"#));
    assert!(html.contains("Created Feb 01, 2026 12:00"));
    assert!(!html.contains("No links yet"));
}

#[tokio::test]
async fn test_index_is_public_when_guarded() {
    let pool = common::test_pool().await;
    let server = common::guarded_server(pool);

    server.get("/").await.assert_status_ok();
}
