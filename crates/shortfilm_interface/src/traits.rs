//! Capability traits for media generation and assembly.

use async_trait::async_trait;
use shortfilm_core::{ImageRequest, VideoProvider, VideoRequest};
use shortfilm_error::ShortFilmResult;
use std::path::{Path, PathBuf};

/// A generation backend.
///
/// Implementations write the artifact to the path named in the request and
/// return it. Transient failures are expected to be retried inside the
/// implementation; an error returned from here is final for that request.
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Generate a still image.
    async fn generate_image(&self, request: &ImageRequest) -> ShortFilmResult<PathBuf>;

    /// Generate a video clip, optionally anchored on a seed image.
    async fn generate_video(&self, request: &VideoRequest) -> ShortFilmResult<PathBuf>;

    /// Which backend this is.
    fn provider(&self) -> VideoProvider;

    /// Video model identifier (e.g., "sora-2", "veo-3.0-generate-001").
    fn video_model(&self) -> &str;
}

#[async_trait]
impl<T: MediaProvider + ?Sized> MediaProvider for Box<T> {
    async fn generate_image(&self, request: &ImageRequest) -> ShortFilmResult<PathBuf> {
        (**self).generate_image(request).await
    }

    async fn generate_video(&self, request: &VideoRequest) -> ShortFilmResult<PathBuf> {
        (**self).generate_video(request).await
    }

    fn provider(&self) -> VideoProvider {
        (**self).provider()
    }

    fn video_model(&self) -> &str {
        (**self).video_model()
    }
}

/// Pulls the last decodable frame out of a video.
#[async_trait]
pub trait FrameExtractor: Send + Sync {
    /// Write the last frame of `video` to `output` and return it.
    ///
    /// Fails if the video is unreadable or has no frames.
    async fn extract_last_frame(&self, video: &Path, output: &Path) -> ShortFilmResult<PathBuf>;
}

/// Joins clips into one film.
#[async_trait]
pub trait Concatenator: Send + Sync {
    /// Concatenate `inputs` in order into `output`.
    ///
    /// Inputs share codec and container, so no re-encoding happens. When
    /// `audio` is given it is mixed in and the result is cut to the shorter
    /// of the two streams. Fails if the tool is unavailable or any input is
    /// missing.
    async fn concatenate(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        audio: Option<&Path>,
    ) -> ShortFilmResult<PathBuf>;

    /// Cut `input` to `duration` seconds, writing `output`.
    async fn trim(&self, input: &Path, output: &Path, duration: f64) -> ShortFilmResult<PathBuf>;
}
