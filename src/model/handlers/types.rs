/**
 * Model Proxy Request Types
 *
 * Request bodies for the model-proxy endpoints. Required fields are
 * `Option`s so that a missing key reaches the handler's validation and
 * its specific error message rather than the JSON extractor's generic
 * rejection.
 */

use serde::{Deserialize, Serialize};

/// Body of POST /model/initialize
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct InitializeRequest {
    pub user_id: Option<String>,
    /// Defaults to false
    pub detect_faces: Option<bool>,
}

/// Body of POST /model/query
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct QueryRequest {
    pub user_id: Option<String>,
    pub query: Option<String>,
    /// Defaults to "memory"
    pub method: Option<String>,
    /// Defaults to false
    pub detect_faces: Option<bool>,
    /// Defaults to 5
    pub topk: Option<u32>,
}

/// Body of POST /model/change_face_tag
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct ChangeFaceTagRequest {
    pub user_id: Option<String>,
    pub face_tag: Option<String>,
    pub new_face_tag: Option<String>,
}

/// Body of POST /model/delete_face_tag
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct DeleteFaceTagRequest {
    pub user_id: Option<String>,
    pub face_tag: Option<String>,
}
