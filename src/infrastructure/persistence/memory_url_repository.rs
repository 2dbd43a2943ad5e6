//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::{RwLock, mpsc};
use tokio_util::sync::CancellationToken;

use super::updates::drain_updates;
use crate::domain::entities::{ShortUrl, UpdateIntent};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Map-backed repository keyed by short URL id.
///
/// Deletion follows the same rules as the PostgreSQL backend: only URLs owned
/// by the requesting user are touched, and the whole batch is applied under a
/// single write lock.
#[derive(Default)]
pub struct MemoryUrlRepository {
    urls: RwLock<HashMap<String, ShortUrl>>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `original_url` under `id` and records `user_id` as an owner.
    ///
    /// Inserting an existing id only adds the owner. An empty `user_id` is not
    /// recorded.
    pub async fn insert(&self, id: &str, original_url: &str, user_id: &str) {
        let mut urls = self.urls.write().await;
        let entry = urls
            .entry(id.to_string())
            .or_insert_with(|| ShortUrl::new(id.to_string(), original_url.to_string()));

        if !user_id.is_empty() {
            entry.owners.insert(user_id.to_string());
        }
    }

    pub async fn find(&self, id: &str) -> Option<ShortUrl> {
        self.urls.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.urls.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.urls.read().await.is_empty()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn update_urls_deleted_flag(
        &self,
        cancel: &CancellationToken,
        user_id: &str,
        mut updates: mpsc::Receiver<UpdateIntent>,
    ) -> Result<(), AppError> {
        let Some(url_ids) = drain_updates(cancel, &mut updates).await else {
            tracing::debug!(user_id, "Deletion cancelled before batch was complete");
            return Ok(());
        };

        if url_ids.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let mut urls = self.urls.write().await;
        let mut affected = 0usize;

        for url_id in &url_ids {
            if let Some(url) = urls.get_mut(url_id)
                && url.is_owned_by(user_id)
                && !url.is_deleted()
            {
                url.deleted_at = Some(now);
                affected += 1;
            }
        }

        tracing::debug!(user_id, requested = url_ids.len(), affected, "Marked URLs deleted");

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
