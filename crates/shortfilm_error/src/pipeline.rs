//! Stage-fatal pipeline errors.

/// Conditions that abort a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PipelineErrorKind {
    /// The starting frame could not be produced
    #[display("Starting frame generation failed: {}", _0)]
    StartingFrame(String),
    /// Every clip failed, there is nothing to assemble
    #[display("No completed clips to stitch ({} attempted)", _0)]
    NoCompletedClips(usize),
    /// The concatenator could not assemble the final film
    #[display("Stitching failed: {}", _0)]
    Stitch(String),
}

/// Pipeline error with location tracking.
///
/// # Examples
///
/// ```
/// use shortfilm_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::NoCompletedClips(3));
/// assert!(format!("{}", err).contains("No completed clips"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
