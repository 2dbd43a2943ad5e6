//! Batch soft-deletion of short URLs.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::application::pipeline::{self, Pipeline};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Number of worker lanes used when none is configured.
pub const DEFAULT_WORKERS: usize = 10;

/// Service marking a user's short URLs as deleted.
///
/// Each call builds a fresh [`Pipeline`], hands its merged stream to the
/// repository and tears the topology down before returning. No state is kept
/// between calls.
pub struct DeletionService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
    workers: usize,
}

impl<R: UrlRepository + ?Sized> DeletionService<R> {
    /// Creates a deletion service with [`DEFAULT_WORKERS`] lanes.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            workers: DEFAULT_WORKERS,
        }
    }

    /// Sets the number of worker lanes. Zero is treated as one.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Marks `url_ids` as deleted on behalf of `user_id`.
    ///
    /// Identifiers are passed through as given: duplicates are kept and an
    /// empty list results in the repository seeing an empty, closed stream.
    /// `user_id` is not validated; callers are expected to have authenticated
    /// it.
    ///
    /// Cancelling `cancel` stops every stage promptly. Whatever the outcome,
    /// all pipeline tasks have finished by the time this returns.
    ///
    /// # Errors
    ///
    /// Returns the repository's error unchanged. Cancellation by itself is not
    /// an error.
    pub async fn delete_urls(
        &self,
        cancel: &CancellationToken,
        user_id: &str,
        url_ids: Vec<String>,
    ) -> Result<(), AppError> {
        let batch_size = url_ids.len();
        metrics::counter!("url_deletion_requests_total").increment(1);
        metrics::histogram!("url_deletion_batch_size").record(batch_size as f64);

        // Child token: tearing down the pipeline must not cancel the caller.
        let pipeline_cancel = cancel.child_token();
        let (updates, tasks) = Pipeline::build(url_ids, self.workers, &pipeline_cancel).into_parts();

        let result = self
            .repository
            .update_urls_deleted_flag(&pipeline_cancel, user_id, updates)
            .await;

        // The merged stream is gone; release anything still blocked upstream.
        pipeline_cancel.cancel();
        pipeline::shutdown(tasks).await;

        match &result {
            Ok(()) if cancel.is_cancelled() => {
                tracing::debug!(user_id, batch_size, "URL deletion cancelled");
            }
            Ok(()) => {
                tracing::info!(user_id, batch_size, "URLs marked as deleted");
            }
            Err(e) => {
                metrics::counter!("url_deletion_failures_total").increment(1);
                tracing::error!(user_id, batch_size, error = %e, "URL deletion failed");
            }
        }

        result
    }
}
