//! Outcome of a run.

use shortfilm_core::{ClipStatus, RunState};
use std::path::PathBuf;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct FilmReport {
    /// The stitched film.
    final_video: Option<PathBuf>,
    /// Clips the run was split into.
    clip_count: usize,
    /// Clips that produced output.
    completed_count: usize,
    /// Failed clips as `(index, message)`.
    failed: Vec<(usize, String)>,
}

impl FilmReport {
    /// Summarize `state`.
    pub fn from_state(state: &RunState) -> Self {
        Self {
            final_video: state.final_video().clone(),
            clip_count: state.clips().len(),
            completed_count: state
                .clips()
                .iter()
                .filter(|clip| *clip.status() == ClipStatus::Completed)
                .count(),
            failed: state.failed_clips(),
        }
    }

    /// Whether any clip failed.
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Human-readable summary, one line per failed clip.
    ///
    /// # Examples
    ///
    /// ```
    /// use shortfilm_core::{RunConfig, RunState};
    /// use shortfilm_pipeline::FilmReport;
    ///
    /// let config = RunConfig::builder()
    ///     .premise("A fox outruns the rain")
    ///     .target_duration(20.0)
    ///     .build()
    ///     .unwrap();
    /// let mut state = RunState::new(config, "output");
    /// state.clip_mut(1).unwrap().fail("quota exceeded");
    ///
    /// let summary = FilmReport::from_state(&state).summary();
    /// assert!(summary.contains("0/2 clips completed"));
    /// assert!(summary.contains("clip 1: quota exceeded"));
    /// ```
    pub fn summary(&self) -> String {
        let mut lines = vec![format!(
            "{}/{} clips completed",
            self.completed_count, self.clip_count
        )];
        lines.extend(
            self.failed
                .iter()
                .map(|(index, message)| format!("  clip {}: {}", index, message)),
        );
        if let Some(video) = &self.final_video {
            lines.push(format!("Final film: {}", video.display()));
        }
        lines.join("\n")
    }
}
