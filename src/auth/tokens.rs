/**
 * Bearer Token Issuing and Verification
 *
 * This module mints and validates the two JWT classes used by the
 * session lifecycle:
 *
 * - Access tokens: 1 hour TTL, signed with the access secret
 * - Refresh tokens: 7 day TTL, signed with the refresh secret
 *
 * The two secrets are independent so that a leaked access-signing key
 * cannot forge long-lived refresh tokens, and vice versa. Tokens are
 * never persisted server-side; expiry and client-side deletion are the
 * only invalidation mechanisms.
 *
 * Secrets come from the application configuration and are passed in by
 * the caller; this module performs no environment reads.
 */

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Access token lifetime: 1 hour
pub const ACCESS_TOKEN_TTL_SECS: u64 = 60 * 60;

/// Refresh token lifetime: 7 days
pub const REFRESH_TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user_num as a string
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// Parse the subject back into a numeric user identifier
    pub fn user_num(&self) -> Result<i64, TokenError> {
        self.sub.parse::<i64>().map_err(|_| TokenError::Malformed)
    }
}

/// Token verification failure modes
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Token is past its expiry, regardless of signature validity
    #[error("token expired")]
    Expired,

    /// Payload or signature tampered with, or signed with a different secret
    #[error("invalid signature")]
    InvalidSignature,

    /// Not parseable as a JWT
    #[error("malformed token")]
    Malformed,
}

/// Create an access token for a user
///
/// # Arguments
/// * `user_num` - Numeric user identifier
/// * `secret` - Access-token signing secret
pub fn issue_access_token(
    user_num: i64,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    issue_token(user_num, ACCESS_TOKEN_TTL_SECS, secret)
}

/// Create a refresh token for a user
///
/// # Arguments
/// * `user_num` - Numeric user identifier
/// * `secret` - Refresh-token signing secret
pub fn issue_refresh_token(
    user_num: i64,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    issue_token(user_num, REFRESH_TOKEN_TTL_SECS, secret)
}

/// Sign a token with the given lifetime and secret
fn issue_token(
    user_num: i64,
    ttl_secs: u64,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();

    let claims = Claims {
        sub: user_num.to_string(),
        exp: now + ttl_secs,
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a token against a secret
///
/// # Errors
///
/// - `TokenError::Expired` if past TTL (signature may still be valid)
/// - `TokenError::InvalidSignature` if tampered or signed with another secret
/// - `TokenError::Malformed` if not parseable as a JWT
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| {
        use jsonwebtoken::errors::ErrorKind;
        match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        }
    })?;

    Ok(token_data.claims)
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCESS_SECRET: &str = "test-access-secret";
    const REFRESH_SECRET: &str = "test-refresh-secret";

    /// Mint a token whose expiry is already in the past
    fn issue_expired_token(user_num: i64, secret: &str) -> String {
        let now = unix_now();
        let claims = Claims {
            sub: user_num.to_string(),
            // Two minutes past expiry, beyond the default validation leeway
            exp: now - 120,
            iat: now - 240,
        };
        let key = EncodingKey::from_secret(secret.as_ref());
        encode(&Header::default(), &claims, &key).unwrap()
    }

    #[test]
    fn test_issue_and_verify_access_token() {
        let token = issue_access_token(42, ACCESS_SECRET).unwrap();

        let claims = verify_token(&token, ACCESS_SECRET).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_num().unwrap(), 42);
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_TTL_SECS);
    }

    #[test]
    fn test_refresh_token_has_longer_ttl() {
        let token = issue_refresh_token(42, REFRESH_SECRET).unwrap();

        let claims = verify_token(&token, REFRESH_SECRET).unwrap();
        assert_eq!(claims.exp - claims.iat, REFRESH_TOKEN_TTL_SECS);
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = issue_expired_token(42, ACCESS_SECRET);

        let result = verify_token(&token, ACCESS_SECRET);
        assert_eq!(result.unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_secret_isolation() {
        // A token signed with the refresh secret must not verify against
        // the access secret, and vice versa.
        let refresh = issue_refresh_token(42, REFRESH_SECRET).unwrap();
        assert_eq!(
            verify_token(&refresh, ACCESS_SECRET).unwrap_err(),
            TokenError::InvalidSignature
        );

        let access = issue_access_token(42, ACCESS_SECRET).unwrap();
        assert_eq!(
            verify_token(&access, REFRESH_SECRET).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = issue_access_token(42, ACCESS_SECRET).unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        tampered.push('A');

        assert!(verify_token(&tampered, ACCESS_SECRET).is_err());
    }

    #[test]
    fn test_malformed_token_rejected() {
        assert_eq!(
            verify_token("not.a.jwt", ACCESS_SECRET).unwrap_err(),
            TokenError::Malformed
        );
        assert_eq!(
            verify_token("", ACCESS_SECRET).unwrap_err(),
            TokenError::Malformed
        );
    }

    #[test]
    fn test_non_numeric_subject_is_malformed() {
        let claims = Claims {
            sub: "abc".to_string(),
            exp: unix_now() + 60,
            iat: unix_now(),
        };
        assert_eq!(claims.user_num().unwrap_err(), TokenError::Malformed);
    }
}
