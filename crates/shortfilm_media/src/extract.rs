//! Last-frame extraction.

use crate::FfmpegTool;
use crate::tool::{ensure_parent, require_input};
use async_trait::async_trait;
use shortfilm_error::{MediaToolError, MediaToolErrorKind, ShortFilmResult};
use shortfilm_interface::FrameExtractor;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Arguments that write the last decodable frame of `video` to `output`.
///
/// Seeks to one second before the end and keeps overwriting a single image,
/// so the file left behind is the final frame.
pub fn last_frame_args(video: &Path, output: &Path) -> Vec<OsString> {
    vec![
        "-y".into(),
        "-loglevel".into(),
        "error".into(),
        "-sseof".into(),
        "-1".into(),
        "-i".into(),
        video.as_os_str().to_owned(),
        "-update".into(),
        "1".into(),
        "-q:v".into(),
        "1".into(),
        output.as_os_str().to_owned(),
    ]
}

/// Frame extractor backed by ffmpeg.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct FfmpegFrameExtractor {
    tool: FfmpegTool,
}

impl FfmpegFrameExtractor {
    /// Create an extractor that runs `tool`.
    pub fn new(tool: FfmpegTool) -> Self {
        Self { tool }
    }
}

#[async_trait]
impl FrameExtractor for FfmpegFrameExtractor {
    #[instrument(skip(self), fields(video = %video.display(), output = %output.display()))]
    async fn extract_last_frame(&self, video: &Path, output: &Path) -> ShortFilmResult<PathBuf> {
        require_input(video)?;
        ensure_parent(output).await?;
        // A stale frame from an earlier attempt must not pass for a new one.
        let _ = tokio::fs::remove_file(output).await;

        self.tool.run(&last_frame_args(video, output)).await?;

        let written = tokio::fs::metadata(output)
            .await
            .map(|m| m.len() > 0)
            .unwrap_or(false);
        if !written {
            return Err(MediaToolError::new(MediaToolErrorKind::NoFrames(
                video.display().to_string(),
            ))
            .into());
        }

        info!("Extracted last frame");
        Ok(output.to_path_buf())
    }
}
