/**
 * Model Route Configuration
 *
 * Routes proxied to the external model service:
 *
 * - `POST /model/upload`          - Multipart photo upload
 * - `POST /model/initialize`      - Memory initialization
 * - `POST /model/query`           - Question answering
 * - `POST /model/change_face_tag` - Face tag rename
 * - `POST /model/delete_face_tag` - Face tag delete
 *
 * Every route sits behind the access guard; the body limit is raised
 * beyond axum's 2 MB default since photo batches are large.
 */

use axum::extract::DefaultBodyLimit;
use axum::Router;

use crate::middleware::auth::auth_middleware;
use crate::model::handlers::{change_face_tag, delete_face_tag, initialize, query, upload};
use crate::server::state::AppState;

/// Maximum request body size for model routes (50 MB)
const MODEL_BODY_LIMIT: usize = 50 * 1024 * 1024;

/// Add the guarded model routes to the router
pub fn configure_model_routes(
    router: Router<AppState>,
    app_state: &AppState,
) -> Router<AppState> {
    let guarded = Router::new()
        .route("/model/upload", axum::routing::post(upload))
        .route("/model/initialize", axum::routing::post(initialize))
        .route("/model/query", axum::routing::post(query))
        .route("/model/change_face_tag", axum::routing::post(change_face_tag))
        .route("/model/delete_face_tag", axum::routing::post(delete_face_tag))
        .layer(DefaultBodyLimit::max(MODEL_BODY_LIMIT))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router.merge(guarded)
}
