//! Memora - Personal-Memory Photo QA Backend
//!
//! Memora is the REST gateway for a personal-memory photo
//! question-answering application. Users register, log in, upload
//! photos, and ask questions answered by an external model service;
//! this crate authenticates those users, proxies their uploads and
//! queries upstream, and materializes returned face and evidence images
//! to local disk for the frontend to display.
//!
//! # Overview
//!
//! The gateway owns three concerns:
//!
//! - **Session lifecycle** - registration, credential verification,
//!   access/refresh token issuance, logout
//! - **Request proxying** - translating inbound upload/initialize/query/
//!   tag-edit requests into the model service's fixed contract
//! - **Asset reconciliation** - full-replace synchronization of each
//!   user's on-disk image set with the latest upstream response
//!
//! Everything else (face detection, retrieval, question answering, the
//! SPA frontend) lives outside this crate.
//!
//! # Module Structure
//!
//! - **`server`** - configuration, application state, initialization
//! - **`routes`** - router assembly
//! - **`auth`** - users, credential store, passwords, tokens, cookies, handlers
//! - **`middleware`** - access guard for the protected routes
//! - **`model`** - model-service client, upstream types, proxy handlers
//! - **`assets`** - asset reconciler
//! - **`error`** - API error taxonomy
//!
//! # Usage
//!
//! ```rust,no_run
//! use memora::server::{config::AppConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<_, error::ApiError>`; the error renders as a
//! `{"error": message}` JSON body with a fixed status per category.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Model-service proxy
pub mod model;

/// Asset materialization
pub mod assets;

/// API error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppConfig, AppState};
