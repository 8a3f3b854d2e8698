//! Checkpoint store trait.

use shortfilm_core::RunState;
use shortfilm_error::ShortFilmResult;
use std::path::Path;

/// Durable persistence of a single run-state document.
///
/// Implementations serialize copies; they never hold or mutate the live state.
pub trait CheckpointStore: Send + Sync {
    /// Persist the full state, replacing any earlier document.
    ///
    /// Creates the output root if needed. Safe to call after every mutation.
    fn save(&self, state: &RunState) -> ShortFilmResult<()>;

    /// Load the stored state, or `None` if nothing has been saved.
    ///
    /// A document that exists but does not deserialize is an error, never
    /// treated as absent.
    fn load(&self) -> ShortFilmResult<Option<RunState>>;

    /// Remove the stored document. No-op if there is none.
    fn clear(&self) -> ShortFilmResult<()>;

    /// Where the document lives.
    fn location(&self) -> &Path;
}
