//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for the session lifecycle.
//! Handlers are organized into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - Credential verification handler
//! ├── logout.rs   - Session teardown handler
//! └── refresh.rs  - Access-token renewal handler
//! ```
//!
//! # Session Lifecycle
//!
//! 1. **Register**: profile + password → user created → public profile returned
//! 2. **Login**: credentials verified → access token in body, refresh token in cookie
//! 3. **Refresh**: refresh cookie verified → fresh access token in body
//! 4. **Logout**: refresh cookie cleared (idempotent)

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Refresh handler
pub mod refresh;

// Re-export commonly used types
pub use types::{LoginRequest, LoginResponse, RefreshResponse, RegisterRequest, RegisterResponse, UserResponse};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use refresh::refresh;
pub use register::register;
