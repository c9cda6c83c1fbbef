/**
 * Logout Handler
 *
 * This module implements the session-teardown handler for
 * POST /auth/logout.
 *
 * Logout is idempotent: with no refresh cookie present the handler
 * responds 204 No Content, so logging out twice in a row never errors.
 * Tokens are stateless, so "logging out" means clearing the refresh
 * cookie; the access token simply ages out of its one-hour window.
 */

use axum::{
    http::{header::SET_COOKIE, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};

use crate::auth::cookies::{clear_refresh_cookie, get_cookie, REFRESH_COOKIE_NAME};
use crate::error::ApiError;

/// Logout handler
///
/// # Returns
///
/// * `204 No Content` - no session cookie present (already logged out)
/// * `200 OK` - cookie cleared
pub async fn logout(headers: HeaderMap) -> Result<Response, ApiError> {
    if get_cookie(&headers, REFRESH_COOKIE_NAME).is_none() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let mut response_headers = HeaderMap::new();
    response_headers.insert(
        SET_COOKIE,
        HeaderValue::from_str(&clear_refresh_cookie()).map_err(|e| {
            tracing::error!("Invalid cookie value: {:?}", e);
            ApiError::internal("Server error")
        })?,
    );

    tracing::info!("User logged out");

    Ok((
        response_headers,
        Json(serde_json::json!({ "message": "Logged out successfully" })),
    )
        .into_response())
}
