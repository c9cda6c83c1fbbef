/**
 * Face Tag Handlers
 *
 * This module implements the face-tag management handlers for
 * POST /model/change_face_tag and POST /model/delete_face_tag.
 *
 * Both operations may change which faces the model service reports for
 * the user, so when the response carries a refreshed `extracted_faces`
 * list the user's `saved_faces` directory is rebuilt from it, the same
 * way initialization does.
 */

use axum::{extract::State, response::Json};

use crate::error::ApiError;
use crate::model::handlers::relay_with_saved_faces;
use crate::model::handlers::types::{ChangeFaceTagRequest, DeleteFaceTagRequest};
use crate::server::state::AppState;

/// Rename a face tag
///
/// # Errors
///
/// * `400 Bad Request` - any of user_id, face_tag, new_face_tag missing
/// * `500 Internal Server Error` - model service or filesystem failure
pub async fn change_face_tag(
    State(state): State<AppState>,
    Json(request): Json<ChangeFaceTagRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (Some(user_id), Some(face_tag), Some(new_face_tag)) = (
        request.user_id.as_deref().filter(|s| !s.is_empty()),
        request.face_tag.as_deref().filter(|s| !s.is_empty()),
        request.new_face_tag.as_deref().filter(|s| !s.is_empty()),
    ) else {
        return Err(ApiError::validation(
            "Missing required fields (user_id, face_tag, new_face_tag)",
        ));
    };

    tracing::info!(
        "Renaming face tag '{}' -> '{}' for user {}",
        face_tag,
        new_face_tag,
        user_id
    );

    let response = state
        .model
        .change_face_tag(user_id, face_tag, new_face_tag)
        .await?;
    let payload = relay_with_saved_faces(&state, user_id, response).await?;

    Ok(Json(payload))
}

/// Delete a face tag
///
/// # Errors
///
/// * `400 Bad Request` - user_id or face_tag missing
/// * `500 Internal Server Error` - model service or filesystem failure
pub async fn delete_face_tag(
    State(state): State<AppState>,
    Json(request): Json<DeleteFaceTagRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (Some(user_id), Some(face_tag)) = (
        request.user_id.as_deref().filter(|s| !s.is_empty()),
        request.face_tag.as_deref().filter(|s| !s.is_empty()),
    ) else {
        return Err(ApiError::validation(
            "Missing required fields (user_id and face_tag)",
        ));
    };

    tracing::info!("Deleting face tag '{}' for user {}", face_tag, user_id);

    let response = state.model.delete_face_tag(user_id, face_tag).await?;
    let payload = relay_with_saved_faces(&state, user_id, response).await?;

    Ok(Json(payload))
}
