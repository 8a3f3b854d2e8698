//! Resumable run state.

use crate::{Clip, ClipStatus, RunConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete state of one film run.
///
/// Exclusively owned by the orchestrator while a run is in progress. The
/// checkpoint store persists copies of it and hands back copies on resume.
///
/// # Examples
///
/// ```
/// use shortfilm_core::{RunConfig, RunState};
///
/// let config = RunConfig::builder()
///     .premise("Two astronauts race home")
///     .target_duration(25.0)
///     .clip_duration(10.0)
///     .build()
///     .unwrap();
/// let state = RunState::new(config, "output");
///
/// let indices: Vec<usize> = state.clips().iter().map(|c| *c.index()).collect();
/// assert_eq!(indices, vec![0, 1, 2]);
/// assert!(!state.completed());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct RunState {
    /// Configuration of the current (or most recent) invocation.
    config: RunConfig,
    /// Directory holding the checkpoint and every artifact.
    output_root: PathBuf,
    /// Image anchoring clip 0.
    starting_frame: Option<PathBuf>,
    /// Clips in index order; length fixed at creation.
    clips: Vec<Clip>,
    /// Assembled film.
    final_video: Option<PathBuf>,
    /// Set only once the final video exists.
    #[getter(skip)]
    completed: bool,
}

impl RunState {
    /// Create a fresh state with `config.clip_count()` pending clips.
    pub fn new(config: RunConfig, output_root: impl Into<PathBuf>) -> Self {
        let clips = (0..config.clip_count())
            .map(|index| Clip::new(index, *config.clip_duration()))
            .collect();
        Self {
            config,
            output_root: output_root.into(),
            starting_frame: None,
            clips,
            final_video: None,
            completed: false,
        }
    }

    /// Whether the final video has been produced.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Replace the configuration, keeping clips and history.
    pub fn replace_config(&mut self, config: RunConfig) {
        self.config = config;
    }

    /// Record the starting frame.
    pub fn set_starting_frame(&mut self, path: PathBuf) {
        self.starting_frame = Some(path);
    }

    /// Starting frame reference is set and the file exists.
    pub fn has_starting_frame(&self) -> bool {
        self.starting_frame.as_deref().is_some_and(Path::exists)
    }

    /// Mutable access to one clip.
    pub fn clip_mut(&mut self, index: usize) -> Option<&mut Clip> {
        self.clips.get_mut(index)
    }

    /// Seed image for the clip at `index`.
    ///
    /// Clip 0 is seeded with the starting frame. Any later clip is seeded with
    /// its predecessor's last frame when the predecessor completed with one
    /// that is still on disk, and falls back to text-only generation otherwise.
    pub fn seed_for(&self, index: usize) -> Option<PathBuf> {
        if index == 0 {
            return self.starting_frame.clone();
        }
        self.clips
            .get(index - 1)
            .filter(|prev| *prev.status() == ClipStatus::Completed)
            .and_then(|prev| prev.last_frame().clone())
            .filter(|frame| frame.exists())
    }

    /// Outputs of completed clips, in index order.
    pub fn completed_outputs(&self) -> Vec<PathBuf> {
        self.clips
            .iter()
            .filter(|clip| *clip.status() == ClipStatus::Completed)
            .filter_map(|clip| clip.output().clone())
            .collect()
    }

    /// Failed clips as `(index, message)` pairs.
    pub fn failed_clips(&self) -> Vec<(usize, String)> {
        self.clips
            .iter()
            .filter(|clip| *clip.status() == ClipStatus::Failed)
            .map(|clip| (*clip.index(), clip.error().clone().unwrap_or_default()))
            .collect()
    }

    /// Record the final video and set the completion flag.
    pub fn finish(&mut self, final_video: PathBuf) {
        self.final_video = Some(final_video);
        self.completed = true;
    }

    /// Completed earlier and the final video is still on disk.
    pub fn is_finished(&self) -> bool {
        self.completed && self.final_video.as_deref().is_some_and(Path::exists)
    }
}
