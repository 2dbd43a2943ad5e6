#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use url_shortener::application::services::DeletionService;
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::infrastructure::persistence::MemoryUrlRepository;
use url_shortener::state::AppState;

pub fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Seeds `count` URLs owned by `user_id`, with ids `{prefix}-{n}`.
pub async fn seed_memory(
    repo: &MemoryUrlRepository,
    user_id: &str,
    prefix: &str,
    count: usize,
) -> Vec<String> {
    let mut seeded = Vec::with_capacity(count);
    for n in 0..count {
        let id = format!("{prefix}-{n}");
        repo.insert(&id, &format!("https://example.com/{prefix}/{n}"), user_id)
            .await;
        seeded.push(id);
    }
    seeded
}

pub fn create_memory_state(repo: Arc<MemoryUrlRepository>, workers: usize) -> AppState {
    let repository: Arc<dyn UrlRepository> = repo;
    AppState::new(DeletionService::new(repository).with_workers(workers))
}

pub async fn create_test_user(pool: &PgPool, user_id: &str) {
    sqlx::query("INSERT INTO users (id) VALUES ($1) ON CONFLICT DO NOTHING")
        .bind(user_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_url(pool: &PgPool, id: &str, url: &str, user_id: &str) {
    create_test_user(pool, user_id).await;

    sqlx::query("INSERT INTO shorten_urls (id, url) VALUES ($1, $2)")
        .bind(id)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();

    sqlx::query("INSERT INTO users_shorten_urls (user_id, url_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn is_deleted(pool: &PgPool, id: &str) -> bool {
    sqlx::query_scalar::<_, bool>("SELECT deleted_at IS NOT NULL FROM shorten_urls WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn deleted_at(pool: &PgPool, id: &str) -> Option<DateTime<Utc>> {
    sqlx::query_scalar("SELECT deleted_at FROM shorten_urls WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}
