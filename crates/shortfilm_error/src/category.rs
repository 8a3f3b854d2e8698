//! Error taxonomy used to decide propagation.

/// How an error is handled by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ErrorCategory {
    /// Invalid or incomplete configuration; raised before any stage runs
    #[display("configuration")]
    Configuration,
    /// Aborts the run; the checkpoint is kept for a later resume
    #[display("stage-fatal")]
    StageFatal,
    /// Recorded on a single clip; the run continues
    #[display("clip-local")]
    ClipLocal,
    /// Retried inside the provider adapter before becoming clip-local
    #[display("transient")]
    Transient,
}
