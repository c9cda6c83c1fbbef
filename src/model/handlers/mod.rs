//! Model Proxy Handlers Module
//!
//! HTTP handlers for the protected model routes. Each handler validates
//! its required fields, forwards to the model service and relays the
//! response, materializing any returned images to disk first.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs        - Module exports and shared response shaping
//! ├── types.rs      - Request types
//! ├── upload.rs     - Multipart photo upload
//! ├── initialize.rs - Memory initialization
//! ├── query.rs      - Question answering with evidence
//! └── face_tags.rs  - Face tag rename/delete
//! ```

use serde_json::json;

use crate::assets::reconciler::{reconcile, AssetCategory, AssetItem};
use crate::error::ApiError;
use crate::model::types::UpstreamResponse;
use crate::server::state::AppState;

/// Request types
pub mod types;

/// Multipart photo upload handler
pub mod upload;

/// Memory initialization handler
pub mod initialize;

/// Question answering handler
pub mod query;

/// Face tag management handlers
pub mod face_tags;

// Re-export handlers
pub use face_tags::{change_face_tag, delete_face_tag};
pub use initialize::initialize;
pub use query::query;
pub use upload::upload;

/// Relay an upstream payload, materializing any returned face crops
///
/// When the response carries a non-empty `extracted_faces` list, the
/// user's `saved_faces` directory is rebuilt from it (full replace) and
/// the resulting paths are appended to the payload as
/// `saved_image_paths`. Responses without faces pass through untouched.
pub(super) async fn relay_with_saved_faces(
    state: &AppState,
    user_id: &str,
    response: UpstreamResponse,
) -> Result<serde_json::Value, ApiError> {
    let saved_paths = match response.extracted_faces.as_deref() {
        Some(faces) if !faces.is_empty() => {
            let items: Vec<AssetItem> = faces
                .iter()
                .map(|face| AssetItem {
                    filename: face.filename.clone(),
                    base64_image: face.base64_image.clone(),
                })
                .collect();

            Some(
                reconcile(
                    &state.config.photos_dir,
                    user_id,
                    AssetCategory::SavedFaces,
                    &items,
                )
                .await?,
            )
        }
        _ => None,
    };

    let mut payload = serde_json::to_value(&response)?;
    if let (Some(paths), Some(object)) = (saved_paths, payload.as_object_mut()) {
        object.insert("saved_image_paths".to_string(), json!(paths));
    }

    Ok(payload)
}
