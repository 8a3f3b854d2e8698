//! Wire types for the Imagen `:predict` and Veo `:predictLongRunning` endpoints.

use serde::{Deserialize, Serialize};

/// Body of `models/{imagen}:predict`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImagenRequest {
    /// One instance per prompt
    pub instances: Vec<ImagenInstance>,
    /// Sampling parameters
    pub parameters: ImagenParameters,
}

/// Imagen prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImagenInstance {
    /// Prompt text
    pub prompt: String,
}

/// Imagen parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagenParameters {
    /// Images to generate
    pub sample_count: u32,
    /// Frame shape, e.g. "16:9"
    pub aspect_ratio: String,
}

/// Response of `models/{imagen}:predict`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImagenResponse {
    /// Generated images; absent when every sample was filtered
    #[serde(default)]
    pub predictions: Vec<ImagenPrediction>,
}

/// One Imagen output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagenPrediction {
    /// Base64-encoded image
    #[serde(default)]
    pub bytes_base64_encoded: Option<String>,
    /// MIME type of the image
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Inline image payload used to seed Veo.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineImage {
    /// Base64-encoded image
    pub bytes_base64_encoded: String,
    /// MIME type of the image
    pub mime_type: String,
}

/// Body of `models/{veo}:predictLongRunning`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VeoRequest {
    /// One instance per clip
    pub instances: Vec<VeoInstance>,
    /// Generation parameters
    pub parameters: VeoParameters,
}

/// Veo prompt with optional first frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VeoInstance {
    /// Prompt text
    pub prompt: String,
    /// First frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<InlineImage>,
}

/// Veo parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VeoParameters {
    /// Frame shape, e.g. "16:9"
    pub aspect_ratio: String,
    /// Clip length in seconds
    pub duration_seconds: u32,
}

/// Long-running operation handle and result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VeoOperation {
    /// Operation resource name, e.g. "models/veo/operations/abc"
    pub name: String,
    /// Set once the operation finished, successfully or not
    #[serde(default)]
    pub done: bool,
    /// Failure details
    #[serde(default)]
    pub error: Option<OperationError>,
    /// Result payload
    #[serde(default)]
    pub response: Option<VeoResponse>,
}

/// Operation failure details.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OperationError {
    /// Status code
    #[serde(default)]
    pub code: Option<i32>,
    /// Message
    #[serde(default)]
    pub message: Option<String>,
}

/// Result payload of a finished Veo operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VeoResponse {
    /// Wrapper holding the generated samples
    #[serde(default)]
    pub generate_video_response: Option<GenerateVideoResponse>,
}

/// Generated samples.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoResponse {
    /// One sample per instance
    #[serde(default)]
    pub generated_samples: Vec<VeoSample>,
}

/// One generated clip.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VeoSample {
    /// Where to download it
    pub video: VeoVideo,
}

/// Downloadable video reference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VeoVideo {
    /// Download URI; requires the API key
    pub uri: String,
}

impl VeoOperation {
    /// URI of the first generated sample.
    pub fn video_uri(&self) -> Option<&str> {
        self.response
            .as_ref()
            .and_then(|r| r.generate_video_response.as_ref())
            .and_then(|r| r.generated_samples.first())
            .map(|sample| sample.video.uri.as_str())
    }

    /// Failure message, if the operation failed.
    pub fn failure_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| {
            e.message
                .clone()
                .unwrap_or_else(|| format!("operation failed with code {:?}", e.code))
        })
    }
}
