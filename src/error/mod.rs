//! API Error Module
//!
//! This module defines the error taxonomy shared by all HTTP handlers.
//! Every handler returns `Result<_, ApiError>`, and the error is rendered
//! as a JSON response by the `IntoResponse` implementation.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Categories
//!
//! - `Validation` - missing or malformed input (400)
//! - `Conflict` - duplicate resource (409)
//! - `Unauthorized` - bad credentials or missing token (401)
//! - `Forbidden` - invalid or expired token (403)
//! - `Upstream` - model service failure (500, relayed message)
//! - `Internal` - unexpected server error (500)
//!
//! # Response Format
//!
//! Errors are serialized as `{"error": "<message>"}`. The raw upstream
//! exception is never relayed beyond its message string.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
