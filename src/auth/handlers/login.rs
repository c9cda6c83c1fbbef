/**
 * Login Handler
 *
 * This module implements the credential-verification handler for
 * POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue access token (1 hour) and refresh token (7 days)
 * 4. Set the refresh token as an HttpOnly cookie
 * 5. Return the access token and public profile in the body
 *
 * # Security
 *
 * - Unknown email and wrong password return an identical 401 body
 *   ("Invalid credentials") to prevent account enumeration
 * - Password verification uses constant-time comparison (via bcrypt)
 * - The refresh token never appears in the JSON body
 */

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::Json,
};

use crate::auth::cookies::build_refresh_cookie;
use crate::auth::handlers::types::{LoginRequest, LoginResponse, UserResponse};
use crate::auth::password::verify_password;
use crate::auth::tokens::{issue_access_token, issue_refresh_token};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - email or password missing
/// * `401 Unauthorized` - unknown email or wrong password (same body)
/// * `500 Internal Server Error` - store or token failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<LoginResponse>), ApiError> {
    let (Some(email), Some(password)) = (
        request.email.as_deref().filter(|s| !s.is_empty()),
        request.password.as_deref().filter(|s| !s.is_empty()),
    ) else {
        return Err(ApiError::validation("Email and password required"));
    };

    tracing::info!("Login request for: {}", email);

    // Find user by email. Absence and a bad password must be
    // indistinguishable to the caller.
    let Some(user) = state.store.find_by_email(email).await? else {
        tracing::warn!("Login failed: unknown email");
        return Err(ApiError::unauthorized("Invalid credentials"));
    };

    if !verify_password(password, &user.password_hash) {
        tracing::warn!("Login failed: wrong password for user {}", user.user_num);
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = issue_access_token(user.user_num, &state.config.access_token_secret)
        .map_err(|e| {
            tracing::error!("Failed to create access token: {:?}", e);
            ApiError::internal("Server error")
        })?;

    let refresh_token = issue_refresh_token(user.user_num, &state.config.refresh_token_secret)
        .map_err(|e| {
            tracing::error!("Failed to create refresh token: {:?}", e);
            ApiError::internal("Server error")
        })?;

    let mut headers = HeaderMap::new();
    let cookie = build_refresh_cookie(&refresh_token);
    headers.insert(
        SET_COOKIE,
        HeaderValue::from_str(&cookie).map_err(|e| {
            tracing::error!("Invalid cookie value: {:?}", e);
            ApiError::internal("Server error")
        })?,
    );

    tracing::info!("User logged in successfully: {}", user.user_num);

    Ok((
        headers,
        Json(LoginResponse {
            token,
            user: UserResponse::from(&user),
        }),
    ))
}
