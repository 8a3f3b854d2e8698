//! Wire types for the OpenAI Images and Videos APIs.

use serde::{Deserialize, Serialize};

/// Body of `POST /images/generations`.
#[derive(Debug, Clone, PartialEq, Serialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ImageGenerationRequest {
    /// Image model
    pub model: String,
    /// Prompt text
    pub prompt: String,
    /// Output size
    #[builder(default = "\"1536x1024\".to_string()")]
    pub size: String,
    /// Number of images
    #[builder(default = "1")]
    pub n: u32,
    /// Requested encoding; only DALL-E models accept it
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<String>,
}

impl ImageGenerationRequest {
    /// Create a new builder.
    pub fn builder() -> ImageGenerationRequestBuilder {
        ImageGenerationRequestBuilder::default()
    }
}

/// Response of `POST /images/generations`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImagesResponse {
    /// Generated images
    pub data: Vec<ImageData>,
}

/// One generated image.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageData {
    /// Base64-encoded image bytes
    #[serde(default)]
    pub b64_json: Option<String>,
    /// Hosted URL, for models that return one
    #[serde(default)]
    pub url: Option<String>,
}

/// Lifecycle of a Sora video job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoJobStatus {
    /// Waiting for capacity
    Queued,
    /// Rendering
    InProgress,
    /// Content ready to download
    Completed,
    /// Rendering failed
    Failed,
}

/// Error details on a failed job.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoJobError {
    /// Machine-readable code
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
}

/// A video job as returned by create and retrieve.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoJob {
    /// Job identifier
    pub id: String,
    /// Current status
    pub status: VideoJobStatus,
    /// Percent complete, when reported
    #[serde(default)]
    pub progress: Option<u32>,
    /// Failure details
    #[serde(default)]
    pub error: Option<VideoJobError>,
}

impl VideoJob {
    /// Failure message, falling back to the error code.
    pub fn failure_message(&self) -> String {
        self.error
            .as_ref()
            .and_then(|e| e.message.clone().or_else(|| e.code.clone()))
            .unwrap_or_else(|| format!("video job {} failed", self.id))
    }
}
