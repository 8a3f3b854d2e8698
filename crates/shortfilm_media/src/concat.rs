//! Clip concatenation and trimming.

use crate::FfmpegTool;
use crate::tool::{ensure_parent, require_input};
use async_trait::async_trait;
use shortfilm_error::{MediaToolError, MediaToolErrorKind, ShortFilmResult};
use shortfilm_interface::Concatenator;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// Name of the concat-demuxer list written next to the output.
const LIST_FILE: &str = "concat_list.txt";

/// Render a concat-demuxer list, one `file '<path>'` line per input.
///
/// Single quotes inside paths are escaped as `'\''`.
///
/// # Examples
///
/// ```
/// use shortfilm_media::render_concat_list;
/// use std::path::PathBuf;
///
/// let list = render_concat_list(&[PathBuf::from("/out/clip_0.mp4"), PathBuf::from("/out/it's.mp4")]);
/// assert_eq!(list, "file '/out/clip_0.mp4'\nfile '/out/it'\\''s.mp4'\n");
/// ```
pub fn render_concat_list(inputs: &[PathBuf]) -> String {
    inputs
        .iter()
        .map(|path| {
            format!(
                "file '{}'\n",
                path.to_string_lossy().replace('\'', "'\\''")
            )
        })
        .collect()
}

/// Arguments for concatenating the list at `list` into `output`.
///
/// Video is stream-copied. With `audio`, the track is encoded to AAC and the
/// result ends with the shorter stream.
pub fn concat_args(list: &Path, output: &Path, audio: Option<&Path>) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-y".into(),
        "-loglevel".into(),
        "error".into(),
        "-f".into(),
        "concat".into(),
        "-safe".into(),
        "0".into(),
        "-i".into(),
        list.as_os_str().to_owned(),
    ];
    match audio {
        Some(track) => {
            args.extend([
                "-i".into(),
                track.as_os_str().to_owned(),
                "-map".into(),
                "0:v:0".into(),
                "-map".into(),
                "1:a:0".into(),
                "-c:v".into(),
                "copy".into(),
                "-c:a".into(),
                "aac".into(),
                "-shortest".into(),
            ]);
        }
        None => args.extend(["-c".into(), "copy".into()]),
    }
    args.push(output.as_os_str().to_owned());
    args
}

/// Arguments for cutting `input` to `duration` seconds.
pub fn trim_args(input: &Path, output: &Path, duration: f64) -> Vec<OsString> {
    vec![
        "-y".into(),
        "-loglevel".into(),
        "error".into(),
        "-i".into(),
        input.as_os_str().to_owned(),
        "-t".into(),
        format!("{:.3}", duration).into(),
        "-c".into(),
        "copy".into(),
        output.as_os_str().to_owned(),
    ]
}

/// Concatenator backed by ffmpeg's concat demuxer.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct FfmpegConcatenator {
    tool: FfmpegTool,
}

impl FfmpegConcatenator {
    /// Create a concatenator that runs `tool`.
    pub fn new(tool: FfmpegTool) -> Self {
        Self { tool }
    }
}

fn absolute(path: &Path) -> Result<PathBuf, MediaToolError> {
    std::path::absolute(path).map_err(|e| {
        MediaToolError::new(MediaToolErrorKind::Io(format!(
            "resolve {}: {}",
            path.display(),
            e
        )))
    })
}

#[async_trait]
impl Concatenator for FfmpegConcatenator {
    #[instrument(skip(self, inputs), fields(clips = inputs.len(), output = %output.display(), audio = audio.is_some()))]
    async fn concatenate(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        audio: Option<&Path>,
    ) -> ShortFilmResult<PathBuf> {
        if inputs.is_empty() {
            return Err(MediaToolError::new(MediaToolErrorKind::InputMissing(
                "no clips to concatenate".to_string(),
            ))
            .into());
        }
        for input in inputs {
            require_input(input)?;
        }
        if let Some(track) = audio {
            require_input(track)?;
        }
        ensure_parent(output).await?;

        // The demuxer resolves relative entries against the list's directory.
        let entries = inputs
            .iter()
            .map(|input| absolute(input))
            .collect::<Result<Vec<_>, _>>()?;
        let list = output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.join(LIST_FILE))
            .unwrap_or_else(|| PathBuf::from(LIST_FILE));
        tokio::fs::write(&list, render_concat_list(&entries))
            .await
            .map_err(|e| {
                MediaToolError::new(MediaToolErrorKind::Io(format!(
                    "write {}: {}",
                    list.display(),
                    e
                )))
            })?;

        let result = self.tool.run(&concat_args(&list, output, audio)).await;

        if let Err(e) = tokio::fs::remove_file(&list).await {
            warn!(list = %list.display(), error = %e, "Failed to remove concat list");
        }
        result?;

        info!("Concatenated clips");
        Ok(output.to_path_buf())
    }

    #[instrument(skip(self), fields(input = %input.display(), output = %output.display()))]
    async fn trim(&self, input: &Path, output: &Path, duration: f64) -> ShortFilmResult<PathBuf> {
        require_input(input)?;
        ensure_parent(output).await?;
        self.tool.run(&trim_args(input, output, duration)).await?;
        info!(duration, "Trimmed film");
        Ok(output.to_path_buf())
    }
}
