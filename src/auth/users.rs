/**
 * User Model
 *
 * This module defines the user identity record and the insert payload
 * used by the credential store.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User record as stored by the credential store
///
/// The password hash is one-way (bcrypt) and must never be returned to a
/// client. Handlers respond with the public profile fields only.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Sequential numeric identifier (BIGSERIAL)
    pub user_num: i64,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address (unique at the store layer)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a new user
///
/// The password arrives here already hashed; registration is the only
/// code path that constructs this.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}
