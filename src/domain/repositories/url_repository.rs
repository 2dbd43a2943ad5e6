//! Repository trait for the short URL deletion path.

use crate::domain::entities::UpdateIntent;
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Storage collaborator consumed by the deletion pipeline.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Marks every URL received on `updates` as deleted for `user_id`.
    ///
    /// Implementations drain `updates` until the channel closes, then apply a
    /// single bulk mutation limited to URLs owned by `user_id`. If `cancel`
    /// fires first, nothing is applied and `Ok(())` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the underlying mutation fails.
    async fn update_urls_deleted_flag(
        &self,
        cancel: &CancellationToken,
        user_id: &str,
        updates: mpsc::Receiver<UpdateIntent>,
    ) -> Result<(), AppError>;

    /// Checks that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on connectivity errors.
    async fn ping(&self) -> Result<(), AppError>;
}
