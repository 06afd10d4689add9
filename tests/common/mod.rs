#![allow(dead_code)]

use axum_test::TestServer;
use golinks::application::services::{AccessGate, AdminCredentials};
use golinks::infrastructure::database;
use golinks::routes::router;
use golinks::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

/// `Authorization` value for `admin:secret`.
pub const ADMIN_AUTH: &str = "Basic YWRtaW46c2VjcmV0";

/// `Authorization` value for `admin:wrong`.
pub const WRONG_PASSWORD_AUTH: &str = "Basic YWRtaW46d3Jvbmc=";

/// `Authorization` value for `other:secret`.
pub const WRONG_USER_AUTH: &str = "Basic b3RoZXI6c2VjcmV0";

/// In-memory database with migrations applied.
///
/// A single connection that never expires keeps the in-memory database alive
/// for the whole test.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    database::run_migrations(&pool).await.unwrap();

    pool
}

pub fn admin_credentials() -> AdminCredentials {
    AdminCredentials::new("admin", "secret")
}

pub async fn insert_link(pool: &SqlitePool, slug: &str, url: &str) {
    sqlx::query("INSERT INTO links (slug, url) VALUES (?1, ?2)")
        .bind(slug)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_link_at(pool: &SqlitePool, slug: &str, url: &str, created_at: &str) {
    sqlx::query("INSERT INTO links (slug, url, created_at) VALUES (?1, ?2, ?3)")
        .bind(slug)
        .bind(url)
        .bind(created_at)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn stored_url(pool: &SqlitePool, slug: &str) -> Option<String> {
    sqlx::query_scalar("SELECT url FROM links WHERE slug = ?1")
        .bind(slug)
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub async fn link_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool, credentials: Option<AdminCredentials>) -> AppState {
    AppState::new(Arc::new(pool), AccessGate::new(credentials))
}

/// Full router over `pool`, admin endpoints open.
pub fn open_server(pool: SqlitePool) -> TestServer {
    TestServer::new(router(create_test_state(pool, None))).unwrap()
}

/// Full router over `pool`, admin endpoints guarded by `admin:secret`.
pub fn guarded_server(pool: SqlitePool) -> TestServer {
    TestServer::new(router(create_test_state(pool, Some(admin_credentials())))).unwrap()
}
