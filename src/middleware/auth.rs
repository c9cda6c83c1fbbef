/**
 * Access Guard Middleware
 *
 * This middleware protects the model-proxy routes. It extracts the
 * access token from its carrier, verifies it against the access secret
 * and attaches the decoded subject to the request before forwarding.
 *
 * # Token Carrier
 *
 * The primary carrier is the `Authorization: Bearer <token>` header; an
 * `accessToken` cookie is accepted as a fallback for clients that keep
 * the token in a cookie.
 *
 * # Semantics
 *
 * - Missing token  -> 401 (nothing presented)
 * - Invalid/expired -> 403 (bad credential presented)
 *
 * The guard is a pure gate: no store lookups, no token refresh, no side
 * effects. Refresh is a separate, explicitly client-initiated operation.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::cookies::{get_cookie, ACCESS_COOKIE_NAME};
use crate::auth::tokens::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated subject extracted from the access token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_num: i64,
}

/// Access guard middleware
///
/// Returns 401 if no token is presented, 403 if the presented token is
/// invalid or expired. On success the request proceeds with
/// [`AuthenticatedUser`] in its extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&request)
        .or_else(|| get_cookie(request.headers(), ACCESS_COOKIE_NAME))
        .ok_or_else(|| {
            tracing::warn!("Missing access token");
            ApiError::unauthorized("No token. Authorization denied.")
        })?;

    let claims = verify_token(&token, &state.config.access_token_secret).map_err(|e| {
        tracing::warn!("Invalid access token: {}", e);
        ApiError::forbidden("Unauthorized: Invalid or expired token.")
    })?;

    let user_num = claims.user_num().map_err(|_| {
        tracing::warn!("Access token carried a non-numeric subject");
        ApiError::forbidden("Unauthorized: Invalid or expired token.")
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_num });

    Ok(next.run(request).await)
}

/// Extract a bearer token from the Authorization header
fn bearer_token(request: &Request) -> Option<String> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::HeaderValue;

    fn request_with_auth(value: &str) -> Request {
        let mut request = Request::builder().uri("/model/query").body(Body::empty()).unwrap();
        request
            .headers_mut()
            .insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        request
    }

    #[test]
    fn test_bearer_token_extraction() {
        let request = request_with_auth("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&request), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_non_bearer_header_ignored() {
        let request = request_with_auth("Basic dXNlcjpwYXNz");
        assert_eq!(bearer_token(&request), None);
    }

    #[test]
    fn test_missing_header() {
        let request = Request::builder()
            .uri("/model/query")
            .body(Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&request), None);
    }
}
