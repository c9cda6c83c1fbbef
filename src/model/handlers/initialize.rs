/**
 * Initialize Handler
 *
 * This module implements the memory-initialization handler for
 * POST /model/initialize.
 *
 * The model service builds (or rebuilds) the user's photo memory and,
 * when face detection is requested, returns the extracted face crops
 * inline. Crops are materialized to the user's `saved_faces` directory
 * and their paths appended to the relayed payload as
 * `saved_image_paths`.
 */

use axum::{extract::State, response::Json};

use crate::error::ApiError;
use crate::model::handlers::relay_with_saved_faces;
use crate::model::handlers::types::InitializeRequest;
use crate::server::state::AppState;

/// Initialize handler
///
/// # Errors
///
/// * `400 Bad Request` - missing user_id
/// * `500 Internal Server Error` - model service or filesystem failure
pub async fn initialize(
    State(state): State<AppState>,
    Json(request): Json<InitializeRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Some(user_id) = request.user_id.as_deref().filter(|s| !s.is_empty()) else {
        return Err(ApiError::validation("Missing user_id"));
    };
    let detect_faces = request.detect_faces.unwrap_or(false);

    tracing::info!(
        "Initializing memory for user {} (detect_faces={})",
        user_id,
        detect_faces
    );

    let response = state.model.initialize_memory(user_id, detect_faces).await?;
    let payload = relay_with_saved_faces(&state, user_id, response).await?;

    Ok(Json(payload))
}
