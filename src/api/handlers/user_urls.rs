//! Handler for batch deletion of the caller's short URLs.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::api::dto::DeleteUrlsRequest;
use crate::api::middleware::AuthenticatedUser;
use crate::error::AppError;
use crate::state::AppState;

/// Marks a batch of the caller's short URLs as deleted.
///
/// # Endpoint
///
/// `DELETE /api/user/urls`
///
/// # Request Body
///
/// ```json
/// ["abc12", "xyz99"]
/// ```
///
/// Identifiers the caller does not own, unknown identifiers and already
/// deleted URLs are silently skipped.
///
/// # Responses
///
/// - `202 Accepted` - batch applied
/// - `400 Bad Request` - body is not a JSON array of strings
/// - `401 Unauthorized` - no authenticated user
/// - `500 Internal Server Error` - storage failure
///
/// If the client goes away mid-request the deletion is cancelled.
pub async fn delete_user_urls_handler(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    payload: Result<Json<DeleteUrlsRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    state
        .deletion_service
        .delete_urls(&cancel, user.as_str(), request.into_inner())
        .await?;

    Ok(StatusCode::ACCEPTED)
}
