/**
 * Model-Service Client
 *
 * HTTP client for the external model-serving API. The service owns all
 * image-processing and retrieval logic; this client only speaks its
 * fixed request/response contract:
 *
 * - `POST /upload_images`         - multipart: user_id + repeated files
 * - `POST /initialize_user_memory`- JSON {user_id, detect_faces}
 * - `POST /answer_query`          - JSON {user_id, query, method, detect_faces, topk}
 * - `POST /change_face_tag`       - JSON {user_id, face_tag, new_face_tag}
 * - `POST /delete_face_tag`       - JSON {user_id, face_tag, detect_faces}
 *
 * Any transport failure or non-success status surfaces as
 * `ModelApiError`; there are no retries here, the upstream owns its own
 * resilience.
 */

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

use crate::model::types::UpstreamResponse;

/// One uploaded file staged in memory
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub content: Bytes,
}

/// Model-service call failure modes
#[derive(Debug, Error)]
pub enum ModelApiError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("model service request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("model service returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Client for the external model-serving API
#[derive(Clone)]
pub struct ModelClient {
    http: reqwest::Client,
    base_url: String,
}

impl ModelClient {
    /// Create a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Upload image files for a user
    ///
    /// The result payload is opaque to this gateway and relayed as-is.
    pub async fn upload_images(
        &self,
        user_id: &str,
        files: Vec<UploadFile>,
    ) -> Result<serde_json::Value, ModelApiError> {
        let mut form = Form::new().text("user_id", user_id.to_string());
        for file in files {
            let part = Part::bytes(file.content.to_vec()).file_name(file.filename);
            form = form.part("files", part);
        }

        let response = self
            .http
            .post(format!("{}/upload_images", self.base_url))
            .multipart(form)
            .send()
            .await?;

        Self::read_json(response).await
    }

    /// Initialize (or rebuild) a user's photo memory
    pub async fn initialize_memory(
        &self,
        user_id: &str,
        detect_faces: bool,
    ) -> Result<UpstreamResponse, ModelApiError> {
        self.post_json(
            "initialize_user_memory",
            json!({
                "user_id": user_id,
                "detect_faces": detect_faces,
            }),
        )
        .await
    }

    /// Answer a question grounded in the user's photo memory
    pub async fn answer_query(
        &self,
        user_id: &str,
        query: &str,
        method: &str,
        detect_faces: bool,
        topk: u32,
    ) -> Result<UpstreamResponse, ModelApiError> {
        self.post_json(
            "answer_query",
            json!({
                "user_id": user_id,
                "query": query,
                "method": method,
                "detect_faces": detect_faces,
                "topk": topk,
            }),
        )
        .await
    }

    /// Rename a face tag
    pub async fn change_face_tag(
        &self,
        user_id: &str,
        face_tag: &str,
        new_face_tag: &str,
    ) -> Result<UpstreamResponse, ModelApiError> {
        self.post_json(
            "change_face_tag",
            json!({
                "user_id": user_id,
                "face_tag": face_tag,
                "new_face_tag": new_face_tag,
            }),
        )
        .await
    }

    /// Delete a face tag
    pub async fn delete_face_tag(
        &self,
        user_id: &str,
        face_tag: &str,
    ) -> Result<UpstreamResponse, ModelApiError> {
        self.post_json(
            "delete_face_tag",
            json!({
                "user_id": user_id,
                "face_tag": face_tag,
                "detect_faces": false,
            }),
        )
        .await
    }

    /// POST a JSON body to an upstream path and decode the response
    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, ModelApiError> {
        let response = self
            .http
            .post(format!("{}/{}", self.base_url, path))
            .json(&body)
            .send()
            .await?;

        Self::read_json(response).await
    }

    /// Check the status and decode the body
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ModelApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ModelApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}
