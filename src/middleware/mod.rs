//! Middleware Module
//!
//! This module contains HTTP middleware for the server. Middleware runs
//! before requests reach handlers.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - Access guard for the protected model routes

pub mod auth;

pub use auth::{auth_middleware, AuthenticatedUser};
