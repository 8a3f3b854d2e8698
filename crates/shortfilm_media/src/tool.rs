//! Locating and running the ffmpeg binary.

use shortfilm_error::{MediaToolError, MediaToolErrorKind};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tracing::{debug, instrument};

/// How much of ffmpeg's stderr is kept in an error.
const STDERR_TAIL_CHARS: usize = 2000;

/// Handle to an ffmpeg executable.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct FfmpegTool {
    /// Path to the binary.
    binary: PathBuf,
}

impl FfmpegTool {
    /// Binary name searched on PATH.
    pub const BINARY: &'static str = "ffmpeg";

    /// Find ffmpeg on PATH.
    ///
    /// # Errors
    ///
    /// Returns `ToolMissing` if it is not installed.
    pub fn locate() -> Result<Self, MediaToolError> {
        which::which(Self::BINARY)
            .map(|binary| Self { binary })
            .map_err(|_| MediaToolError::new(MediaToolErrorKind::ToolMissing(Self::BINARY.to_string())))
    }

    /// Use a specific binary without checking it exists.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Command line as a single string, for logs and errors.
    pub fn render(&self, args: &[OsString]) -> String {
        std::iter::once(self.binary.as_os_str())
            .chain(args.iter().map(OsString::as_os_str))
            .map(|part| part.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run ffmpeg to completion.
    ///
    /// # Errors
    ///
    /// `ToolMissing` if the binary cannot be spawned, `CommandFailed` with the
    /// tail of stderr if it exits unsuccessfully.
    #[instrument(skip(self, args), fields(binary = %self.binary.display()))]
    pub async fn run(&self, args: &[OsString]) -> Result<(), MediaToolError> {
        let rendered = self.render(args);
        debug!(command = %rendered, "Running ffmpeg");

        let output = tokio::process::Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    MediaToolError::new(MediaToolErrorKind::ToolMissing(
                        self.binary.display().to_string(),
                    ))
                } else {
                    MediaToolError::new(MediaToolErrorKind::Io(format!("{}: {}", rendered, e)))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MediaToolError::new(MediaToolErrorKind::CommandFailed {
                command: rendered,
                status: output.status.to_string(),
                stderr: tail(&stderr, STDERR_TAIL_CHARS),
            }));
        }
        Ok(())
    }
}

/// Fail with `InputMissing` unless `path` exists.
pub(crate) fn require_input(path: &Path) -> Result<(), MediaToolError> {
    if path.exists() {
        Ok(())
    } else {
        Err(MediaToolError::new(MediaToolErrorKind::InputMissing(
            path.display().to_string(),
        )))
    }
}

/// Create the parent directory of `path`.
pub(crate) async fn ensure_parent(path: &Path) -> Result<(), MediaToolError> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => tokio::fs::create_dir_all(parent).await.map_err(|e| {
            MediaToolError::new(MediaToolErrorKind::Io(format!(
                "create {}: {}",
                parent.display(),
                e
            )))
        }),
        None => Ok(()),
    }
}

fn tail(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    let count = trimmed.chars().count();
    if count <= max_chars {
        trimmed.to_string()
    } else {
        trimmed.chars().skip(count - max_chars).collect()
    }
}
