/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: store connection, state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect the credential store (runs pending migrations)
 * 2. Create the model-service client
 * 3. Ensure the photos root directory exists
 * 4. Assemble the application state and router
 *
 * Unlike configuration defaults, store connection failures are fatal:
 * there is no degraded mode without a user store.
 */

use std::sync::Arc;

use axum::Router;

use crate::auth::store::PgUserStore;
use crate::model::client::ModelClient;
use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Validated application configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Store connection/migration failures and photos-directory creation
/// failures abort startup.
pub async fn create_app(config: AppConfig) -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("Initializing memora backend server");

    let store = PgUserStore::connect(&config.database_url).await?;

    let model = ModelClient::new(config.model_api_base_url.clone());
    tracing::info!("Model service proxy -> {}", config.model_api_base_url);

    tokio::fs::create_dir_all(&config.photos_dir).await?;
    tracing::info!("Serving photo assets from {}", config.photos_dir.display());

    let app_state = AppState {
        store: Arc::new(store),
        model,
        config: Arc::new(config),
    };

    Ok(create_router(app_state))
}
