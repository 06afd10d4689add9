mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use golinks::routes::app_router;
use tower::ServiceExt;

#[tokio::test]
async fn test_redirect_success() {
    let pool = common::test_pool().await;
    common::insert_link(&pool, "wiki", "https://wiki.example.com").await;
    let server = common::open_server(pool);

    let response = server.get("/wiki").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://wiki.example.com");
}

#[tokio::test]
async fn test_redirect_preserves_url_exactly() {
    let pool = common::test_pool().await;
    let url = "https://example.com/Some/Path?q=1&b=two#frag";
    common::insert_link(&pool, "deep", url).await;
    let server = common::open_server(pool);

    let response = server.get("/deep").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), url);
}

#[tokio::test]
async fn test_redirect_multi_segment_slug() {
    let pool = common::test_pool().await;
    common::insert_link(&pool, "team/oncall", "https://oncall.example.com").await;
    let server = common::open_server(pool);

    let response = server.get("/team/oncall").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://oncall.example.com");
}

#[tokio::test]
async fn test_redirect_not_found_has_no_details() {
    let pool = common::test_pool().await;
    let server = common::open_server(pool);

    let response = server.get("/notfound").await;

    response.assert_status_not_found();
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_redirect_non_utf8_path_is_plain_not_found() {
    let pool = common::test_pool().await;
    let server = common::open_server(pool);

    let response = server.get("/%FF").await;

    response.assert_status_not_found();
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_redirect_unusable_stored_url_is_plain_not_found() {
    let pool = common::test_pool().await;
    common::insert_link(&pool, "ctl", "https://example.com/a\u{1}b").await;
    let server = common::open_server(pool);

    let response = server.get("/ctl").await;

    response.assert_status_not_found();
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_redirect_reserved_slug_not_found() {
    let pool = common::test_pool().await;
    let server = common::open_server(pool);

    let response = server.get("/admin").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_is_public_when_guarded() {
    let pool = common::test_pool().await;
    common::insert_link(&pool, "wiki", "https://wiki.example.com").await;
    let server = common::guarded_server(pool);

    let response = server.get("/wiki").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
}

#[tokio::test]
async fn test_redirect_trailing_slash_is_trimmed() {
    let pool = common::test_pool().await;
    common::insert_link(&pool, "wiki", "https://wiki.example.com").await;
    let app = app_router(common::create_test_state(pool, None));

    let response = app
        .oneshot(Request::builder().uri("/wiki/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://wiki.example.com"
    );
}
