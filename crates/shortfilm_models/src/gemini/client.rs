//! Gemini client for Imagen starting frames and Veo clips.

use super::{
    ImagenInstance, ImagenParameters, ImagenRequest, ImagenResponse, InlineImage, VeoInstance,
    VeoOperation, VeoParameters, VeoRequest,
};
use crate::http::{
    ApiKey, error_for_response, image_mime, json_body, poll_job, read_image,
    supported_duration, transport_error, write_artifact,
};
use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use shortfilm_core::{ImageRequest, VideoProvider, VideoRequest};
use shortfilm_error::{ProviderError, ProviderErrorKind, ShortFilmResult};
use shortfilm_interface::MediaProvider;
use shortfilm_rate_limit::{ProviderSettings, RetryPolicy, retry_transient};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Clip lengths Veo accepts, in seconds.
const VEO_DURATIONS: &[u32] = &[4, 6, 8];

const ASPECT_RATIO: &str = "16:9";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Imagen + Veo client.
///
/// Starting, polling and downloading a Veo operation are retried as separate
/// requests.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct GeminiClient {
    #[getter(skip)]
    client: Client,
    #[getter(skip)]
    api_key: ApiKey,
    base_url: String,
    image_model: String,
    #[getter(skip)]
    video_model: String,
    poll_interval: Duration,
    max_polls: u32,
    retry: RetryPolicy,
}

impl GeminiClient {
    /// Create a client from provider settings and an API key.
    #[instrument(skip_all, fields(video_model = %settings.video_model))]
    pub fn new(settings: &ProviderSettings, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: ApiKey::new(api_key),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            image_model: settings.image_model.clone(),
            video_model: settings.video_model.clone(),
            poll_interval: Duration::from_secs(settings.poll_interval_secs),
            max_polls: settings.max_polls,
            retry: settings.retry,
        }
    }

    /// Build the Veo request body for a clip.
    pub async fn veo_request(&self, request: &VideoRequest) -> Result<VeoRequest, ProviderError> {
        let image = match request.seed_image() {
            Some(seed) => {
                let bytes = read_image(seed).await?;
                Some(InlineImage {
                    bytes_base64_encoded: base64::engine::general_purpose::STANDARD.encode(bytes),
                    mime_type: image_mime(seed).to_string(),
                })
            }
            None => None,
        };
        Ok(VeoRequest {
            instances: vec![VeoInstance {
                prompt: request.prompt().clone(),
                image,
            }],
            parameters: VeoParameters {
                aspect_ratio: ASPECT_RATIO.to_string(),
                duration_seconds: supported_duration(*request.duration(), VEO_DURATIONS),
            },
        })
    }

    async fn start_operation(&self, body: &VeoRequest) -> Result<VeoOperation, ProviderError> {
        let response = self
            .client
            .post(format!(
                "{}/models/{}:predictLongRunning",
                self.base_url, self.video_model
            ))
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        json_body(response).await
    }

    async fn poll_operation(&self, name: &str) -> Result<VeoOperation, ProviderError> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, name))
            .header(API_KEY_HEADER, self.api_key.expose())
            .send()
            .await
            .map_err(transport_error)?;
        json_body(response).await
    }

    async fn wait_for_operation(
        &self,
        operation: VeoOperation,
    ) -> Result<VeoOperation, ProviderError> {
        let label = format!("operation {}", operation.name);
        let operation_name = operation.name.clone();
        let name = operation_name.as_str();
        let operation = poll_job(
            &self.retry,
            self.poll_interval,
            self.max_polls,
            &label,
            operation,
            |operation| operation.done,
            move || self.poll_operation(name),
        )
        .await?;
        match operation.failure_message() {
            Some(message) => Err(ProviderError::new(ProviderErrorKind::GenerationFailed(
                message,
            ))),
            None => Ok(operation),
        }
    }

    async fn download(&self, uri: &str) -> Result<Vec<u8>, ProviderError> {
        let response = self
            .client
            .get(uri)
            .header(API_KEY_HEADER, self.api_key.expose())
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(error_for_response(response).await);
        }
        let bytes = response.bytes().await.map_err(transport_error)?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl MediaProvider for GeminiClient {
    #[instrument(skip(self, request), fields(model = %self.image_model, output = %request.output().display()))]
    async fn generate_image(&self, request: &ImageRequest) -> ShortFilmResult<PathBuf> {
        let body = ImagenRequest {
            instances: vec![ImagenInstance {
                prompt: request.prompt().clone(),
            }],
            parameters: ImagenParameters {
                sample_count: 1,
                aspect_ratio: ASPECT_RATIO.to_string(),
            },
        };
        let response = self
            .client
            .post(format!(
                "{}/models/{}:predict",
                self.base_url, self.image_model
            ))
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        let predictions: ImagenResponse = json_body(response).await?;

        let encoded = predictions
            .predictions
            .into_iter()
            .find_map(|p| p.bytes_base64_encoded)
            .ok_or_else(|| {
                ProviderError::new(ProviderErrorKind::GenerationFailed(
                    "Imagen returned no images (prompt may have been filtered)".to_string(),
                ))
            })?;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| {
                ProviderError::new(ProviderErrorKind::InvalidResponse(format!(
                    "Invalid base64 image: {}",
                    e
                )))
            })?;

        let path = write_artifact(request.output(), &bytes).await?;
        info!(bytes = bytes.len(), "Generated starting frame");
        Ok(path)
    }

    #[instrument(skip(self, request), fields(model = %self.video_model, output = %request.output().display()))]
    async fn generate_video(&self, request: &VideoRequest) -> ShortFilmResult<PathBuf> {
        let body = self.veo_request(request).await?;
        debug!(
            seconds = body.parameters.duration_seconds,
            seeded = request.seed_image().is_some(),
            "Starting Veo operation"
        );
        let body = &body;
        let operation =
            retry_transient(&self.retry, "start_operation", move || self.start_operation(body))
                .await?;
        info!(name = %operation.name, "Veo operation started");

        let operation = self.wait_for_operation(operation).await?;
        let uri = operation.video_uri().ok_or_else(|| {
            ProviderError::new(ProviderErrorKind::GenerationFailed(
                "Veo operation finished without a video".to_string(),
            ))
        })?;
        let bytes =
            retry_transient(&self.retry, "download_video", move || self.download(uri)).await?;
        let path = write_artifact(request.output(), &bytes).await?;
        info!(bytes = bytes.len(), "Downloaded clip");
        Ok(path)
    }

    fn provider(&self) -> VideoProvider {
        VideoProvider::Gemini
    }

    fn video_model(&self) -> &str {
        &self.video_model
    }
}
