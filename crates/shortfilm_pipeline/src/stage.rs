//! Pipeline stages.

use shortfilm_core::RunState;

/// Ordered phases of a run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Stage {
    /// Build or resume the run state
    #[display("init")]
    Init,
    /// Produce the image that seeds clip 0
    #[display("starting frame")]
    StartingFrame,
    /// Generate clips in index order
    #[display("clip chain")]
    ClipChain,
    /// Concatenate completed clips
    #[display("stitch")]
    Stitch,
    /// Final video exists
    #[display("complete")]
    Complete,
}

impl Stage {
    /// First stage a run over `state` still has to do.
    ///
    /// Completion markers are checked against the filesystem, so an artifact
    /// deleted since the checkpoint was written sends the run back to the
    /// stage that produces it.
    ///
    /// # Examples
    ///
    /// ```
    /// use shortfilm_core::{RunConfig, RunState};
    /// use shortfilm_pipeline::Stage;
    ///
    /// let config = RunConfig::builder().premise("A kite escapes").build().unwrap();
    /// let state = RunState::new(config, "output");
    /// assert_eq!(Stage::resume_point(&state), Stage::StartingFrame);
    /// ```
    pub fn resume_point(state: &RunState) -> Self {
        if state.is_finished() {
            Stage::Complete
        } else if !state.has_starting_frame() {
            Stage::StartingFrame
        } else if state.clips().iter().any(|clip| !clip.is_reusable()) {
            Stage::ClipChain
        } else {
            Stage::Stitch
        }
    }
}
