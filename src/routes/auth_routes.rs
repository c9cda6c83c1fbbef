/**
 * Auth Route Configuration
 *
 * Routes for the session lifecycle:
 *
 * - `POST /auth/register` - User registration
 * - `POST /auth/login`    - Credential verification, sets refresh cookie
 * - `POST /auth/logout`   - Clears the refresh cookie (idempotent)
 * - `GET  /auth/refresh`  - Mints a fresh access token from the cookie
 *
 * All four are public; they are the only way to obtain the tokens the
 * model routes require.
 */

use axum::Router;

use crate::auth::handlers::{login, logout, refresh, register};
use crate::server::state::AppState;

/// Add the auth routes to the router
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/register", axum::routing::post(register))
        .route("/auth/login", axum::routing::post(login))
        .route("/auth/logout", axum::routing::post(logout))
        .route("/auth/refresh", axum::routing::get(refresh))
}
