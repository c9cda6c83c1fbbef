//! Authentication Module
//!
//! This module handles user registration, credential verification and the
//! bearer-token session lifecycle.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User identity record
//! - **`store`** - Credential store trait and implementations
//! - **`password`** - bcrypt hash/verify wrappers
//! - **`tokens`** - JWT issuing and verification (access + refresh)
//! - **`cookies`** - Set-Cookie building and Cookie-header parsing
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model
//! ├── store.rs        - UserStore trait, Postgres + in-memory stores
//! ├── password.rs     - Password hashing
//! ├── tokens.rs       - JWT token management
//! ├── cookies.rs      - Session cookie handling
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Access tokens expire after 1 hour, refresh tokens after 7 days
//! - Access and refresh tokens are signed with independent secrets
//! - Credential failures present a single generic message

/// User identity record
pub mod users;

/// Credential store trait and implementations
pub mod store;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod tokens;

/// Session cookie handling
pub mod cookies;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{login, logout, refresh, register};
pub use store::{MemoryUserStore, PgUserStore, StoreError, UserStore};
pub use users::{NewUser, User};
