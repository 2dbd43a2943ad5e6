//! Authenticated user extraction.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::domain::entities::UserId;
use crate::error::AppError;

/// The caller's identity, as established by an upstream authentication layer.
///
/// Authentication itself happens outside this crate: whatever validates the
/// session is expected to insert a [`UserId`] into the request extensions.
/// Requests reaching a handler without one are rejected with `401`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/api/user/urls", delete(delete_user_urls_handler))
///     .layer(Extension(UserId::from("user-1")))
///     .with_state(state);
/// ```
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub UserId);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserId>()
            .filter(|user| !user.as_str().is_empty())
            .cloned()
            .map(AuthenticatedUser)
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    serde_json::json!({"reason": "No authenticated user for this request"}),
                )
            })
    }
}
