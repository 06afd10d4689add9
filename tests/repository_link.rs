mod common;

use golinks::AppError;
use golinks::domain::entities::NewLink;
use golinks::domain::repositories::LinkRepository;
use golinks::infrastructure::persistence::SqliteLinkRepository;
use std::sync::Arc;

fn new_link(slug: &str, url: &str) -> NewLink {
    NewLink {
        slug: slug.to_string(),
        url: url.to_string(),
    }
}

#[tokio::test]
async fn test_create_link() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let before = chrono::Utc::now() - chrono::Duration::seconds(5);
    let link = repo
        .create(new_link("wiki", "https://wiki.example.com"))
        .await
        .unwrap();

    assert_eq!(link.slug, "wiki");
    assert_eq!(link.url, "https://wiki.example.com");
    assert!(link.created_at >= before);
}

#[tokio::test]
async fn test_create_duplicate_slug_is_conflict() {
    let pool = common::test_pool().await;
    common::insert_link(&pool, "wiki", "https://first.example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool.clone()));

    let result = repo
        .create(new_link("wiki", "https://second.example.com"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
    assert_eq!(
        common::stored_url(&pool, "wiki").await.as_deref(),
        Some("https://first.example.com")
    );
}

#[tokio::test]
async fn test_find_by_slug() {
    let pool = common::test_pool().await;
    common::insert_link(&pool, "docs", "https://docs.rs").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_slug("docs").await.unwrap();

    assert_eq!(link.unwrap().url, "https://docs.rs");
}

#[tokio::test]
async fn test_find_by_slug_not_found() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_slug("missing").await.unwrap();

    assert!(link.is_none());
}

#[tokio::test]
async fn test_find_by_slug_is_case_sensitive() {
    let pool = common::test_pool().await;
    common::insert_link(&pool, "Wiki", "https://wiki.example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    assert!(repo.find_by_slug("wiki").await.unwrap().is_none());
    assert!(repo.find_by_slug("Wiki").await.unwrap().is_some());
}

#[tokio::test]
async fn test_list_all_empty() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let links = repo.list_all().await.unwrap();

    assert!(links.is_empty());
}

#[tokio::test]
async fn test_list_all_newest_first() {
    let pool = common::test_pool().await;
    common::insert_link_at(&pool, "old", "https://old.example.com", "2025-01-01 08:00:00.000").await;
    common::insert_link_at(&pool, "new", "https://new.example.com", "2026-06-01 08:00:00.000").await;
    common::insert_link_at(&pool, "mid", "https://mid.example.com", "2025-09-01 08:00:00.000").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let slugs: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.slug)
        .collect();

    assert_eq!(slugs, vec!["new", "mid", "old"]);
}

#[tokio::test]
async fn test_list_all_same_timestamp_uses_insertion_order() {
    let pool = common::test_pool().await;
    let ts = "2026-01-01 00:00:00.000";
    common::insert_link_at(&pool, "first", "https://a.example.com", ts).await;
    common::insert_link_at(&pool, "second", "https://b.example.com", ts).await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let links = repo.list_all().await.unwrap();

    assert_eq!(links[0].slug, "second");
    assert_eq!(links[1].slug, "first");
}

#[tokio::test]
async fn test_delete_link() {
    let pool = common::test_pool().await;
    common::insert_link(&pool, "wiki", "https://wiki.example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool.clone()));

    assert!(repo.delete("wiki").await.unwrap());
    assert!(common::stored_url(&pool, "wiki").await.is_none());
}

#[tokio::test]
async fn test_delete_unknown_slug() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    assert!(!repo.delete("ghost").await.unwrap());
}

#[tokio::test]
async fn test_count() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool.clone()));
    assert_eq!(repo.count().await.unwrap(), 0);

    common::insert_link(&pool, "a", "https://a.example.com").await;
    common::insert_link(&pool, "b", "https://b.example.com").await;

    assert_eq!(repo.count().await.unwrap(), 2);
}
