//! PostgreSQL-backed deletion tests.
//!
//! Each test gets a fresh database from `#[sqlx::test]`; run with
//! `DATABASE_URL` set and `cargo test -- --ignored`.

mod common;

use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use url_shortener::application::services::DeletionService;
use url_shortener::domain::entities::UpdateIntent;
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::infrastructure::persistence::PgUrlRepository;

fn repo(pool: PgPool) -> Arc<PgUrlRepository> {
    Arc::new(PgUrlRepository::new(Arc::new(pool)))
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_delete_only_owned_urls(pool: PgPool) {
    common::create_test_url(&pool, "abc12", "https://a.example.com", "user-1").await;
    common::create_test_url(&pool, "xyz99", "https://b.example.com", "user-1").await;
    common::create_test_url(&pool, "other", "https://c.example.com", "user-2").await;

    let service = DeletionService::new(repo(pool.clone()));
    service
        .delete_urls(
            &CancellationToken::new(),
            "user-1",
            common::ids(&["abc12", "xyz99", "abc12", "other", "missing"]),
        )
        .await
        .unwrap();

    assert!(common::is_deleted(&pool, "abc12").await);
    assert!(common::is_deleted(&pool, "xyz99").await);
    assert!(!common::is_deleted(&pool, "other").await);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_delete_large_batch(pool: PgPool) {
    let ids: Vec<String> = (0..1_000).map(|n| format!("bulk-{n}")).collect();
    for id in &ids {
        common::create_test_url(&pool, id, &format!("https://example.com/{id}"), "user-1").await;
    }

    let service = DeletionService::new(repo(pool.clone())).with_workers(10);
    service
        .delete_urls(&CancellationToken::new(), "user-1", ids.clone())
        .await
        .unwrap();

    let remaining: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM shorten_urls WHERE deleted_at IS NULL")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(remaining, 0);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_repeat_delete_keeps_timestamp(pool: PgPool) {
    common::create_test_url(&pool, "abc12", "https://a.example.com", "user-1").await;
    let service = DeletionService::new(repo(pool.clone()));

    service
        .delete_urls(&CancellationToken::new(), "user-1", common::ids(&["abc12"]))
        .await
        .unwrap();
    let first = common::deleted_at(&pool, "abc12").await;

    service
        .delete_urls(&CancellationToken::new(), "user-1", common::ids(&["abc12"]))
        .await
        .unwrap();
    let second = common::deleted_at(&pool, "abc12").await;

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_cancelled_stream_applies_nothing(pool: PgPool) {
    common::create_test_url(&pool, "abc12", "https://a.example.com", "user-1").await;
    let repo = repo(pool.clone());

    let (tx, rx) = mpsc::channel(1);
    tx.send(UpdateIntent::new("abc12")).await.unwrap();

    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = repo.update_urls_deleted_flag(&cancel, "user-1", rx).await;

    assert!(result.is_ok());
    assert!(!common::is_deleted(&pool, "abc12").await);
    drop(tx);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_ping(pool: PgPool) {
    assert!(repo(pool).ping().await.is_ok());
}
