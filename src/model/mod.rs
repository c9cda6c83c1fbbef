//! Model-Service Proxy Module
//!
//! This module translates inbound upload/initialize/query/tag-edit
//! requests into calls against the external model service's fixed
//! contract and relays the responses. The model service itself (face
//! detection, retrieval, question answering) is an opaque collaborator;
//! nothing in this crate interprets its payloads beyond the
//! asset-bearing fields.
//!
//! # Module Structure
//!
//! ```text
//! model/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - HTTP client for the model service
//! ├── types.rs    - Upstream response types
//! └── handlers/   - HTTP handlers for the /model routes
//! ```
//!
//! # Failure Semantics
//!
//! Input validation failures never reach the model service. Upstream
//! network failures and non-success statuses are logged and surfaced as
//! a uniform `{error}` body with a 500 status; the proxy never retries.

/// HTTP client for the model service
pub mod client;

/// Upstream response types
pub mod types;

/// HTTP handlers for the model routes
pub mod handlers;

// Re-export commonly used types and handlers
pub use client::{ModelApiError, ModelClient, UploadFile};
pub use handlers::{change_face_tag, delete_face_tag, initialize, query, upload};
pub use types::{ExtractedFace, MemoryPhoto, UpstreamResponse};
