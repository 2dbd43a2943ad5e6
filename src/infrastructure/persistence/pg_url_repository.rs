//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::updates::drain_updates;
use crate::domain::entities::UpdateIntent;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for short URL soft-deletion.
///
/// The whole batch is applied with one parameterised `UPDATE`, joined against
/// `users_shorten_urls` so a user can only delete URLs they created.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
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

        let query = sqlx::query(
            r#"
            UPDATE shorten_urls AS su
            SET deleted_at = NOW()
            FROM users_shorten_urls AS usu
            WHERE usu.url_id = su.id
              AND usu.user_id = $1
              AND su.id = ANY($2)
              AND su.deleted_at IS NULL
            "#,
        )
        .bind(user_id)
        .bind(url_ids.as_slice())
        .execute(self.pool.as_ref());

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!(user_id, "Deletion cancelled while updating");
                return Ok(());
            }
            result = query => result?,
        };

        tracing::debug!(
            user_id,
            requested = url_ids.len(),
            affected = result.rows_affected(),
            "Marked URLs deleted"
        );

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
