/**
 * Upstream Response Types
 *
 * The model service answers with loosely-shaped JSON; the fields this
 * gateway acts on are declared explicitly and everything else passes
 * through untouched. Handlers branch on the declared optionals instead
 * of probing raw JSON.
 */

use serde::{Deserialize, Serialize};

/// Face crop returned by the model service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedFace {
    /// Target filename for the crop
    pub filename: String,
    /// Encoded image payload (optionally data-URI prefixed)
    pub base64_image: String,
}

/// Retrieved memory photo backing a query answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryPhoto {
    /// Identifier of the memory; doubles as the evidence filename
    pub memory_id: String,
    /// Encoded image payload (optionally data-URI prefixed)
    pub base64_image: String,
}

/// Model-service response with the asset-bearing fields made explicit
///
/// `rest` carries the opaque remainder of the payload (answers, status
/// fields, counts) and is relayed to the client verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamResponse {
    /// Face crops to materialize under `saved_faces`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_faces: Option<Vec<ExtractedFace>>,

    /// Memory photos to materialize under `evidence`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_photos: Option<Vec<MemoryPhoto>>,

    /// Opaque remainder of the upstream payload
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}
