//! Clip lifecycle.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Lifecycle status of one clip.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ClipStatus {
    /// Not attempted yet
    #[default]
    #[display("pending")]
    Pending,
    /// Submitted to the provider
    #[display("generating")]
    Generating,
    /// Output produced
    #[display("completed")]
    Completed,
    /// Generation or frame extraction failed
    #[display("failed")]
    Failed,
}

/// One segment of the film.
///
/// A completed clip always has an output reference; a failed clip always has
/// an error message.
///
/// # Examples
///
/// ```
/// use shortfilm_core::{Clip, ClipStatus};
///
/// let mut clip = Clip::new(0, 10.0);
/// assert_eq!(*clip.status(), ClipStatus::Pending);
///
/// clip.fail("quota exceeded");
/// assert_eq!(*clip.status(), ClipStatus::Failed);
/// assert_eq!(clip.error().as_deref(), Some("quota exceeded"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Clip {
    /// Position in the film, starting at 0.
    index: usize,
    /// Lifecycle status.
    status: ClipStatus,
    /// Generation prompt; empty until first assigned, then fixed.
    prompt: String,
    /// Image anchoring the first frame.
    seed_image: Option<PathBuf>,
    /// Generated video.
    output: Option<PathBuf>,
    /// Last frame extracted from the generated video.
    last_frame: Option<PathBuf>,
    /// Requested duration in seconds.
    duration: f64,
    /// Most recent failure message.
    error: Option<String>,
}

impl Clip {
    /// Create a pending clip.
    pub fn new(index: usize, duration: f64) -> Self {
        Self {
            index,
            status: ClipStatus::Pending,
            prompt: String::new(),
            seed_image: None,
            output: None,
            last_frame: None,
            duration,
            error: None,
        }
    }

    /// Completed and its output file is still on disk.
    pub fn is_reusable(&self) -> bool {
        self.status == ClipStatus::Completed
            && self.output.as_deref().is_some_and(Path::exists)
    }

    /// Assign the prompt unless one was assigned before.
    ///
    /// Returns true if the prompt was set by this call.
    pub fn assign_prompt(&mut self, build: impl FnOnce() -> String) -> bool {
        if self.prompt.is_empty() {
            self.prompt = build();
            true
        } else {
            false
        }
    }

    /// Mark as submitted with the given seed image.
    ///
    /// Clears artifacts from any previous attempt.
    pub fn begin(&mut self, seed_image: Option<PathBuf>) {
        self.status = ClipStatus::Generating;
        self.seed_image = seed_image;
        self.output = None;
        self.last_frame = None;
        self.error = None;
    }

    /// Record a successful generation.
    pub fn complete(&mut self, output: PathBuf, last_frame: Option<PathBuf>) {
        self.status = ClipStatus::Completed;
        self.output = Some(output);
        self.last_frame = last_frame;
        self.error = None;
    }

    /// Record a failure.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = ClipStatus::Failed;
        self.output = None;
        self.last_frame = None;
        self.error = Some(message.into());
    }
}
