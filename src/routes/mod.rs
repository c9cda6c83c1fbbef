//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── auth_routes.rs  - Session lifecycle routes
//! └── model_routes.rs - Guarded model-proxy routes
//! ```
//!
//! # Route Overview
//!
//! ## Auth Routes (public)
//!
//! - `POST /auth/register` - User registration
//! - `POST /auth/login`    - User login
//! - `POST /auth/logout`   - Logout (idempotent)
//! - `GET  /auth/refresh`  - Access token renewal
//!
//! ## Model Routes (access token required)
//!
//! - `POST /model/upload`          - Photo upload (multipart)
//! - `POST /model/initialize`      - Memory initialization
//! - `POST /model/query`           - Question answering
//! - `POST /model/change_face_tag` - Face tag rename
//! - `POST /model/delete_face_tag` - Face tag delete
//!
//! ## Static Files
//!
//! Materialized photo assets are served under `/photos`.

/// Main router creation
pub mod router;

/// Session lifecycle routes
pub mod auth_routes;

/// Guarded model-proxy routes
pub mod model_routes;

// Re-export commonly used functions
pub use router::create_router;
