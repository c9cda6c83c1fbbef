/**
 * API Error Types
 *
 * This module defines the error type used by HTTP handlers. Each variant
 * carries a human-readable message and maps to a fixed HTTP status code.
 *
 * # Error Categories
 *
 * ## Validation Errors
 *
 * Input validation failures caught at the handler boundary. These never
 * reach the user store or the model service.
 *
 * ## Auth Errors
 *
 * `Unauthorized` covers bad credentials and missing tokens; `Forbidden`
 * covers tokens that are present but invalid or expired. Credential
 * failures always use the same message to avoid account enumeration.
 *
 * ## Upstream Errors
 *
 * Failures of the external model service. The upstream error is reduced
 * to its message string before it reaches the client.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::assets::reconciler::ReconcileError;
use crate::auth::store::StoreError;
use crate::model::client::ModelApiError;

/// Error type returned by all HTTP handlers
///
/// Each variant maps to a fixed HTTP status code via [`ApiError::status_code`].
/// Use the constructor helpers (`ApiError::validation(...)`, etc.) rather
/// than building variants directly.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input (400)
    #[error("{message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Duplicate resource (409)
    #[error("{message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Bad credentials or missing token (401)
    #[error("{message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Invalid or expired token (403)
    #[error("{message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Model service failure (500)
    #[error("{message}")]
    Upstream {
        /// Message relayed from the upstream failure
        message: String,
    },

    /// Unexpected server error (500)
    #[error("{message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl ApiError {
    /// Create a validation error (400)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a conflict error (409)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create an unauthorized error (401)
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a forbidden error (403)
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create an upstream error (500)
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create an internal error (500)
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `Conflict` - 409 Conflict
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `Upstream` - 500 Internal Server Error
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::Conflict { message }
            | Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::Upstream { message }
            | Self::Internal { message } => message,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => Self::conflict("User already exists"),
            StoreError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                Self::internal("Server error")
            }
        }
    }
}

impl From<ModelApiError> for ApiError {
    fn from(err: ModelApiError) -> Self {
        tracing::error!("Model service error: {}", err);
        Self::upstream(err.to_string())
    }
}

impl From<ReconcileError> for ApiError {
    fn from(err: ReconcileError) -> Self {
        tracing::error!("Asset reconciliation error: {}", err);
        Self::internal(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Serialization error: {:?}", err);
        Self::internal("Server error")
    }
}
