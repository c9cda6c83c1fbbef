/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Auth routes (public: register, login, logout, refresh)
 * 2. Model routes (guarded by the access middleware)
 * 3. Static photo service under /photos
 * 4. Fallback handler (404)
 */

use axum::Router;
use tower_http::services::ServeDir;

use crate::routes::auth_routes::configure_auth_routes;
use crate::routes::model_routes::configure_model_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (store, model client, configuration)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // Public auth routes
    let router = configure_auth_routes(router);

    // Protected model routes (access guard applied inside)
    let router = configure_model_routes(router, &app_state);

    // Static photo assets written by the reconciler
    let router = router.nest_service(
        "/photos",
        ServeDir::new(&app_state.config.photos_dir),
    );

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    router.with_state(app_state)
}
