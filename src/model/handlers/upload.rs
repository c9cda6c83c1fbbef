/**
 * Upload Handler
 *
 * This module implements the photo upload handler for
 * POST /model/upload (multipart/form-data).
 *
 * File contents are staged in memory and streamed on to the model
 * service with their original filenames; nothing is written to local
 * disk here. The upstream result payload is opaque to this gateway and
 * relayed as-is.
 */

use axum::{
    extract::{Extension, Multipart, State},
    response::Json,
};

use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::model::client::UploadFile;
use crate::server::state::AppState;

/// Upload handler
///
/// Expects a `user_id` text field and one or more `files` parts.
///
/// # Errors
///
/// * `400 Bad Request` - missing user_id, no files, or malformed body
/// * `500 Internal Server Error` - model service failure
pub async fn upload(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut user_id: Option<String> = None;
    let mut files: Vec<UploadFile> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::validation(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("user_id") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::validation(format!("Invalid multipart body: {}", e)))?;
                user_id = Some(value);
            }
            Some("files") => {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| "upload".to_string());
                let content = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::validation(format!("Invalid multipart body: {}", e)))?;
                files.push(UploadFile { filename, content });
            }
            _ => {}
        }
    }

    let Some(user_id) = user_id.filter(|s| !s.is_empty()) else {
        return Err(ApiError::validation("Missing user_id"));
    };

    if files.is_empty() {
        return Err(ApiError::validation("No files uploaded"));
    }

    tracing::info!(
        "Uploading {} file(s) for user {} (session {})",
        files.len(),
        user_id,
        auth.user_num
    );

    let result = state.model.upload_images(&user_id, files).await?;

    Ok(Json(result))
}
