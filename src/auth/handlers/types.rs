/**
 * Authentication Handler Types
 *
 * Request and response types shared by the register, login, logout and
 * refresh handlers.
 *
 * Request fields are all `Option<String>` so that a missing key reaches
 * the handler's own validation (and its specific error message) instead
 * of being rejected by the JSON extractor.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

/// Registration response: public profile fields, never the hash
#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    pub message: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login response
///
/// The access token is returned in the body only; the refresh token
/// travels in an HttpOnly cookie set alongside this response.
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    /// Access token (1-hour expiry)
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// Refresh response carrying a freshly minted access token
#[derive(Serialize, Deserialize, Debug)]
pub struct RefreshResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// User profile safe to return to clients
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub user_num: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_num: user.user_num,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}
