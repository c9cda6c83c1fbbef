/**
 * Token Refresh Handler
 *
 * This module implements the access-token renewal handler for
 * GET /auth/refresh.
 *
 * # Refresh Process
 *
 * 1. Read the refresh token from its cookie
 * 2. Verify it against the refresh secret
 * 3. Confirm the subject user still exists in the store
 * 4. Issue a fresh access token
 *
 * Refresh is an explicit client-initiated operation; the access guard
 * never refreshes on the client's behalf.
 *
 * # Errors
 *
 * A missing cookie is 401 (nothing to refresh), a present-but-invalid
 * token is 403 (possession of a bad credential), and a valid token for
 * a deleted user is 401.
 */

use axum::{extract::State, http::HeaderMap, response::Json};

use crate::auth::cookies::{get_cookie, REFRESH_COOKIE_NAME};
use crate::auth::handlers::types::RefreshResponse;
use crate::auth::tokens::{issue_access_token, verify_token};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Refresh handler
///
/// # Errors
///
/// * `401 Unauthorized` - refresh cookie absent, or subject user gone
/// * `403 Forbidden` - token invalid or expired
/// * `500 Internal Server Error` - store or token failure
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RefreshResponse>, ApiError> {
    let Some(token) = get_cookie(&headers, REFRESH_COOKIE_NAME) else {
        return Err(ApiError::unauthorized("No token. Authorization denied."));
    };

    let claims = verify_token(&token, &state.config.refresh_token_secret).map_err(|e| {
        tracing::warn!("Refresh token rejected: {}", e);
        ApiError::forbidden("Unauthorized: Invalid or expired token.")
    })?;

    let user_num = claims.user_num().map_err(|_| {
        tracing::warn!("Refresh token carried a non-numeric subject");
        ApiError::forbidden("Unauthorized: Invalid or expired token.")
    })?;

    // The subject must still exist; a deleted account cannot mint new
    // access tokens from an old cookie.
    let Some(user) = state.store.find_by_id(user_num).await? else {
        tracing::warn!("Refresh for unknown user {}", user_num);
        return Err(ApiError::unauthorized("Invalid credentials"));
    };

    let access_token = issue_access_token(user.user_num, &state.config.access_token_secret)
        .map_err(|e| {
            tracing::error!("Failed to create access token: {:?}", e);
            ApiError::internal("Server error")
        })?;

    tracing::info!("Access token refreshed for user {}", user.user_num);

    Ok(Json(RefreshResponse { access_token }))
}
