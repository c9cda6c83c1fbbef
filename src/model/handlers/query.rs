/**
 * Query Handler
 *
 * This module implements the question-answering handler for
 * POST /model/query.
 *
 * The model service answers a natural-language question grounded in the
 * user's photo memory. When the answer is backed by retrieved memory
 * photos, those are materialized to the user's `evidence` directory and
 * the raw `memory_photos` payload is replaced with the resulting
 * `evidence` paths.
 */

use axum::{extract::State, response::Json};
use serde_json::json;

use crate::assets::reconciler::{reconcile, AssetCategory, AssetItem};
use crate::error::ApiError;
use crate::model::handlers::types::QueryRequest;
use crate::server::state::AppState;

/// Default retrieval method
const DEFAULT_METHOD: &str = "memory";

/// Default number of memories to retrieve
const DEFAULT_TOPK: u32 = 5;

/// Query handler
///
/// # Errors
///
/// * `400 Bad Request` - user_id or query missing
/// * `500 Internal Server Error` - model service or filesystem failure
pub async fn query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (Some(user_id), Some(query)) = (
        request.user_id.as_deref().filter(|s| !s.is_empty()),
        request.query.as_deref().filter(|s| !s.is_empty()),
    ) else {
        return Err(ApiError::validation(
            "Missing required fields (user_id and query are required)",
        ));
    };

    let method = request.method.as_deref().unwrap_or(DEFAULT_METHOD);
    let detect_faces = request.detect_faces.unwrap_or(false);
    let topk = request.topk.unwrap_or(DEFAULT_TOPK);

    tracing::info!(
        "Query for user {} (method={}, topk={})",
        user_id,
        method,
        topk
    );

    let response = state
        .model
        .answer_query(user_id, query, method, detect_faces, topk)
        .await?;

    // Materialize retrieved photos and swap the inline payload for the
    // on-disk references the frontend can resolve.
    let evidence = match response.memory_photos.as_deref() {
        Some(photos) => {
            let items: Vec<AssetItem> = photos
                .iter()
                .map(|photo| AssetItem {
                    filename: photo.memory_id.clone(),
                    base64_image: photo.base64_image.clone(),
                })
                .collect();

            Some(
                reconcile(
                    &state.config.photos_dir,
                    user_id,
                    AssetCategory::Evidence,
                    &items,
                )
                .await?,
            )
        }
        None => None,
    };

    let mut payload = serde_json::to_value(&response)?;
    if let (Some(paths), Some(object)) = (evidence, payload.as_object_mut()) {
        object.remove("memory_photos");
        object.insert("evidence".to_string(), json!(paths));
    }

    Ok(Json(payload))
}
