/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, constructed once in
 * `server::init` and cloned into every handler:
 * - The credential store handle (trait object, so tests can substitute
 *   the in-memory store)
 * - The model-service client
 * - The application configuration (secrets, paths)
 *
 * There is no global mutable state; everything handlers need is
 * injected through this struct.
 *
 * # Thread Safety
 *
 * All fields are cheap to clone and safe to share: `Arc` handles for
 * the store and configuration, and `reqwest::Client` (internally
 * reference-counted) inside the model client.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::store::UserStore;
use crate::model::client::ModelClient;
use crate::server::config::AppConfig;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Credential store handle
    pub store: Arc<dyn UserStore>,

    /// Client for the external model service
    pub model: ModelClient,

    /// Application configuration
    pub config: Arc<AppConfig>,
}

/// Allow handlers to extract the store handle directly
impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Allow handlers to extract the model client directly
impl FromRef<AppState> for ModelClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.model.clone()
    }
}

/// Allow handlers to extract the configuration directly
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::auth::store::MemoryUserStore;

    /// Build an AppState over the in-memory store for handler tests
    pub fn test_state() -> AppState {
        let config = AppConfig {
            database_url: "postgres://unused".to_string(),
            access_token_secret: "test-access-secret".to_string(),
            refresh_token_secret: "test-refresh-secret".to_string(),
            model_api_base_url: "http://127.0.0.1:9".to_string(),
            photos_dir: std::env::temp_dir().join(format!("memora-test-{}", std::process::id())),
            port: 0,
        };

        AppState {
            store: Arc::new(MemoryUserStore::new()),
            model: ModelClient::new(config.model_api_base_url.clone()),
            config: Arc::new(config),
        }
    }
}
