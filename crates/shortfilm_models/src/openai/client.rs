//! OpenAI client for the starting frame and Sora clips.

use super::{ImageGenerationRequest, ImagesResponse, VideoJob, VideoJobStatus};
use crate::http::{
    ApiKey, image_mime, json_body, poll_job, read_image, supported_duration, transport_error,
    write_artifact,
};
use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use shortfilm_core::{ImageRequest, VideoProvider, VideoRequest};
use shortfilm_error::{ProviderError, ProviderErrorKind, ShortFilmResult};
use shortfilm_interface::MediaProvider;
use shortfilm_rate_limit::{ProviderSettings, RetryPolicy, retry_transient};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Clip lengths Sora accepts, in seconds.
const SORA_DURATIONS: &[u32] = &[4, 8, 12];

/// Frame size for Sora clips.
const SORA_SIZE: &str = "1280x720";

/// OpenAI Images + Videos client.
///
/// Each request of a video job (create, poll, download) is retried on its
/// own under the provider's retry policy, so a transient failure part way
/// through never submits a second job.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct OpenAiClient {
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

impl OpenAiClient {
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

    fn image_request(&self, prompt: &str) -> Result<ImageGenerationRequest, ProviderError> {
        let response_format = self
            .image_model
            .starts_with("dall-e")
            .then(|| "b64_json".to_string());
        ImageGenerationRequest::builder()
            .model(self.image_model.clone())
            .prompt(prompt)
            .response_format(response_format)
            .build()
            .map_err(|e| ProviderError::new(ProviderErrorKind::InvalidResponse(e.to_string())))
    }

    async fn create_video(&self, request: &VideoRequest) -> Result<VideoJob, ProviderError> {
        let seconds = supported_duration(*request.duration(), SORA_DURATIONS);
        let mut form = Form::new()
            .text("model", self.video_model.clone())
            .text("prompt", request.prompt().clone())
            .text("seconds", seconds.to_string())
            .text("size", SORA_SIZE);

        if let Some(seed) = request.seed_image() {
            let bytes = read_image(seed).await?;
            let file_name = seed
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| "seed.png".to_string());
            let part = Part::bytes(bytes)
                .file_name(file_name)
                .mime_str(image_mime(seed))
                .map_err(|e| ProviderError::new(ProviderErrorKind::Io(e.to_string())))?;
            form = form.part("input_reference", part);
        }

        debug!(seconds, seeded = request.seed_image().is_some(), "Creating video job");
        let response = self
            .client
            .post(format!("{}/videos", self.base_url))
            .bearer_auth(self.api_key.expose())
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;
        json_body(response).await
    }

    async fn retrieve_video(&self, id: &str) -> Result<VideoJob, ProviderError> {
        let response = self
            .client
            .get(format!("{}/videos/{}", self.base_url, id))
            .bearer_auth(self.api_key.expose())
            .send()
            .await
            .map_err(transport_error)?;
        json_body(response).await
    }

    async fn wait_for_video(&self, job: VideoJob) -> Result<VideoJob, ProviderError> {
        let label = format!("video job {}", job.id);
        let job_id = job.id.clone();
        let id = job_id.as_str();
        let job = poll_job(
            &self.retry,
            self.poll_interval,
            self.max_polls,
            &label,
            job,
            |job| matches!(job.status, VideoJobStatus::Completed | VideoJobStatus::Failed),
            move || self.retrieve_video(id),
        )
        .await?;
        match job.status {
            VideoJobStatus::Failed => Err(ProviderError::new(
                ProviderErrorKind::GenerationFailed(job.failure_message()),
            )),
            _ => Ok(job),
        }
    }

    async fn download_video(&self, id: &str) -> Result<Vec<u8>, ProviderError> {
        let response = self
            .client
            .get(format!("{}/videos/{}/content", self.base_url, id))
            .bearer_auth(self.api_key.expose())
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(crate::http::error_for_response(response).await);
        }
        let bytes = response.bytes().await.map_err(transport_error)?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl MediaProvider for OpenAiClient {
    #[instrument(skip(self, request), fields(model = %self.image_model, output = %request.output().display()))]
    async fn generate_image(&self, request: &ImageRequest) -> ShortFilmResult<PathBuf> {
        let body = self.image_request(request.prompt())?;
        let response = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(self.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        let images: ImagesResponse = json_body(response).await?;

        let encoded = images
            .data
            .into_iter()
            .find_map(|image| image.b64_json)
            .ok_or_else(|| {
                ProviderError::new(ProviderErrorKind::InvalidResponse(
                    "Images response contained no b64_json data".to_string(),
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
        let job = retry_transient(&self.retry, "create_video", move || {
            self.create_video(request)
        })
        .await?;
        info!(id = %job.id, "Video job created");
        let job = self.wait_for_video(job).await?;
        let id = job.id.as_str();
        let bytes =
            retry_transient(&self.retry, "download_video", move || self.download_video(id))
                .await?;
        let path = write_artifact(request.output(), &bytes).await?;
        info!(id = %job.id, bytes = bytes.len(), "Downloaded clip");
        Ok(path)
    }

    fn provider(&self) -> VideoProvider {
        VideoProvider::OpenAi
    }

    fn video_model(&self) -> &str {
        &self.video_model
    }
}
