/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Validate all fields are present and non-empty
 * 2. Check password and confirmation match
 * 3. Check no user exists with this email
 * 4. Hash password using bcrypt
 * 5. Create user in the store
 * 6. Return public profile fields
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage
 * - The password hash is never returned in responses
 * - The store enforces email uniqueness, so a racing duplicate insert
 *   still resolves to 409 rather than a second row
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::auth::password::hash_password;
use crate::auth::users::NewUser;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Extract a required field, treating empty strings as missing
fn require(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - missing field or password mismatch
/// * `409 Conflict` - email already registered
/// * `500 Internal Server Error` - hashing or store failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    // Check all fields are present
    let (Some(first_name), Some(last_name), Some(email), Some(password), Some(confirm_password)) = (
        require(&request.first_name),
        require(&request.last_name),
        require(&request.email),
        require(&request.password),
        require(&request.confirm_password),
    ) else {
        return Err(ApiError::validation("All fields are required"));
    };

    // Check password match
    if password != confirm_password {
        return Err(ApiError::validation("Passwords do not match"));
    }

    tracing::info!("Registration request for: {}", email);

    // Check for existing user
    if state.store.find_by_email(email).await?.is_some() {
        tracing::warn!("Email already exists: {}", email);
        return Err(ApiError::conflict("User already exists"));
    }

    // Hash the password
    let password_hash = hash_password(password).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::internal("Server error")
    })?;

    // Create new user
    let user = state
        .store
        .create(NewUser {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password_hash,
        })
        .await?;

    tracing::info!("User registered successfully: {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }),
    ))
}
