//! Recording mocks for the collaborator traits.

use async_trait::async_trait;
use shortfilm_core::{ImageRequest, VideoProvider, VideoRequest};
use shortfilm_error::{
    MediaToolError, MediaToolErrorKind, ProviderError, ProviderErrorKind, ShortFilmResult,
};
use shortfilm_interface::{Concatenator, FrameExtractor, MediaProvider};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Clip index encoded in an artifact name such as `clip_3.mp4`.
fn clip_index(path: &Path) -> Option<usize> {
    path.file_stem()?
        .to_str()?
        .strip_prefix("clip_")?
        .split('_')
        .next()?
        .parse()
        .ok()
}

fn touch(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent");
    }
    std::fs::write(path, contents).expect("write mock artifact");
}

/// One recorded video request.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoCall {
    pub index: usize,
    pub prompt: String,
    pub seed_image: Option<PathBuf>,
    pub output: PathBuf,
}

/// Everything the mock provider was asked to do.
#[derive(Debug, Default)]
pub struct ProviderLog {
    pub image_calls: usize,
    pub video_calls: Vec<VideoCall>,
}

impl ProviderLog {
    pub fn video_indices(&self) -> Vec<usize> {
        self.video_calls.iter().map(|call| call.index).collect()
    }
}

/// Provider that writes placeholder media and fails on chosen clips.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    log: Arc<Mutex<ProviderLog>>,
    failing_clips: Arc<HashSet<usize>>,
    fail_image: bool,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail `generate_video` for these clip indices.
    pub fn failing_clips(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            failing_clips: Arc::new(indices.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Fail `generate_image`.
    pub fn failing_image() -> Self {
        Self {
            fail_image: true,
            ..Self::default()
        }
    }

    pub fn log(&self) -> std::sync::MutexGuard<'_, ProviderLog> {
        self.log.lock().expect("provider log poisoned")
    }

    pub fn total_calls(&self) -> usize {
        let log = self.log();
        log.image_calls + log.video_calls.len()
    }
}

#[async_trait]
impl MediaProvider for MockProvider {
    async fn generate_image(&self, request: &ImageRequest) -> ShortFilmResult<PathBuf> {
        self.log().image_calls += 1;
        if self.fail_image {
            return Err(ProviderError::new(ProviderErrorKind::GenerationFailed(
                "image model refused the prompt".to_string(),
            ))
            .into());
        }
        touch(request.output(), b"png");
        Ok(request.output().clone())
    }

    async fn generate_video(&self, request: &VideoRequest) -> ShortFilmResult<PathBuf> {
        let index = clip_index(request.output()).expect("clip output name");
        self.log().video_calls.push(VideoCall {
            index,
            prompt: request.prompt().clone(),
            seed_image: request.seed_image().clone(),
            output: request.output().clone(),
        });
        if self.failing_clips.contains(&index) {
            return Err(ProviderError::new(ProviderErrorKind::GenerationFailed(format!(
                "content policy rejected clip {}",
                index
            )))
            .into());
        }
        touch(request.output(), b"mp4");
        Ok(request.output().clone())
    }

    fn provider(&self) -> VideoProvider {
        VideoProvider::OpenAi
    }

    fn video_model(&self) -> &str {
        "mock-video"
    }
}

/// Frame extractor that records the videos it was given.
#[derive(Debug, Clone, Default)]
pub struct MockExtractor {
    calls: Arc<Mutex<Vec<PathBuf>>>,
    failing_clips: Arc<HashSet<usize>>,
}

impl MockExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report zero frames for these clip indices.
    pub fn failing_clips(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            failing_clips: Arc::new(indices.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().expect("extractor log poisoned").clone()
    }
}

#[async_trait]
impl FrameExtractor for MockExtractor {
    async fn extract_last_frame(&self, video: &Path, output: &Path) -> ShortFilmResult<PathBuf> {
        self.calls
            .lock()
            .expect("extractor log poisoned")
            .push(video.to_path_buf());
        if clip_index(video).is_some_and(|index| self.failing_clips.contains(&index)) {
            return Err(
                MediaToolError::new(MediaToolErrorKind::NoFrames(video.display().to_string()))
                    .into(),
            );
        }
        touch(output, b"png");
        Ok(output.to_path_buf())
    }
}

/// One recorded concatenation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcatCall {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub audio: Option<PathBuf>,
}

/// Concatenator that records its inputs and writes the output.
#[derive(Debug, Clone, Default)]
pub struct MockConcatenator {
    concat_calls: Arc<Mutex<Vec<ConcatCall>>>,
    trim_calls: Arc<Mutex<Vec<(PathBuf, PathBuf, f64)>>>,
    tool_missing: bool,
}

impl MockConcatenator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Behave as if ffmpeg were not installed.
    pub fn tool_missing() -> Self {
        Self {
            tool_missing: true,
            ..Self::default()
        }
    }

    pub fn concat_calls(&self) -> Vec<ConcatCall> {
        self.concat_calls.lock().expect("concat log poisoned").clone()
    }

    pub fn trim_calls(&self) -> Vec<(PathBuf, PathBuf, f64)> {
        self.trim_calls.lock().expect("trim log poisoned").clone()
    }
}

#[async_trait]
impl Concatenator for MockConcatenator {
    async fn concatenate(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        audio: Option<&Path>,
    ) -> ShortFilmResult<PathBuf> {
        self.concat_calls
            .lock()
            .expect("concat log poisoned")
            .push(ConcatCall {
                inputs: inputs.to_vec(),
                output: output.to_path_buf(),
                audio: audio.map(Path::to_path_buf),
            });
        if self.tool_missing {
            return Err(
                MediaToolError::new(MediaToolErrorKind::ToolMissing("ffmpeg".to_string())).into(),
            );
        }
        touch(output, b"film");
        Ok(output.to_path_buf())
    }

    async fn trim(&self, input: &Path, output: &Path, duration: f64) -> ShortFilmResult<PathBuf> {
        self.trim_calls
            .lock()
            .expect("trim log poisoned")
            .push((input.to_path_buf(), output.to_path_buf(), duration));
        touch(output, b"trimmed");
        Ok(output.to_path_buf())
    }
}
