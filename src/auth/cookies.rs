/**
 * Session Cookie Handling
 *
 * Builds the Set-Cookie values for the refresh-token cookie and parses
 * incoming Cookie headers. The refresh token is the only cookie this
 * server sets; access tokens travel in the JSON body and the
 * Authorization header.
 *
 * # Cookie Attributes
 *
 * The refresh cookie is HttpOnly (no script access), Secure (HTTPS
 * only), SameSite=Strict (no cross-site sends), Path=/ and expires with
 * the refresh token's own 7-day TTL.
 */

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

use crate::auth::tokens::REFRESH_TOKEN_TTL_SECS;

/// Name of the refresh-token cookie
pub const REFRESH_COOKIE_NAME: &str = "refreshToken";

/// Name of the access-token cookie (accepted as a fallback carrier)
pub const ACCESS_COOKIE_NAME: &str = "accessToken";

/// Build the Set-Cookie value carrying a refresh token
pub fn build_refresh_cookie(token: &str) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; Secure; SameSite=Strict",
        REFRESH_COOKIE_NAME, token, REFRESH_TOKEN_TTL_SECS
    )
}

/// Build the Set-Cookie value that clears the refresh cookie
///
/// Max-Age=0 instructs the browser to drop the cookie immediately. The
/// security attributes must match the ones the cookie was set with.
pub fn clear_refresh_cookie() -> String {
    format!(
        "{}=; Path=/; Max-Age=0; HttpOnly; Secure; SameSite=Strict",
        REFRESH_COOKIE_NAME
    )
}

/// Extract a cookie value by name from request headers
///
/// Handles multiple Cookie headers and multiple `name=value` pairs per
/// header. Returns the first match.
pub fn get_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header in headers.get_all(COOKIE) {
        let Ok(raw) = header.to_str() else {
            continue;
        };
        for pair in raw.split(';') {
            let mut parts = pair.trim().splitn(2, '=');
            let key = parts.next()?.trim();
            if key == name {
                return parts.next().map(|v| v.trim().to_string());
            }
        }
    }
    None
}
