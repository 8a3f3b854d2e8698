//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, ErrorCategory, JsonError, MediaToolError, PipelineError,
    ProviderError, ProviderErrorKind, RetryableError, StorageError,
};
use std::time::Duration;

/// Every error the pipeline can produce.
///
/// # Examples
///
/// ```
/// use shortfilm_error::{ShortFilmError, ConfigError};
///
/// let err: ShortFilmError = ConfigError::new("bad option").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ShortFilmErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Checkpoint storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Media provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Frame extractor or concatenator error
    #[from(MediaToolError)]
    MediaTool(MediaToolError),
    /// Stage-fatal pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Shortfilm error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Shortfilm Error: {}", _0)]
pub struct ShortFilmError(Box<ShortFilmErrorKind>);

impl ShortFilmError {
    /// Create a new error from a kind.
    pub fn new(kind: ShortFilmErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ShortFilmErrorKind {
        &self.0
    }

    /// Classify this error for propagation decisions.
    ///
    /// A missing credential is a configuration problem even when an adapter
    /// reports it; a retryable provider failure is transient; every other
    /// provider or media-tool failure is local to the clip that caused it.
    pub fn category(&self) -> ErrorCategory {
        match self.kind() {
            ShortFilmErrorKind::Config(_) | ShortFilmErrorKind::Builder(_) => {
                ErrorCategory::Configuration
            }
            ShortFilmErrorKind::Provider(e) => match &e.kind {
                ProviderErrorKind::MissingCredential(_) => ErrorCategory::Configuration,
                kind if kind.is_retryable() => ErrorCategory::Transient,
                _ => ErrorCategory::ClipLocal,
            },
            ShortFilmErrorKind::MediaTool(_) => ErrorCategory::ClipLocal,
            ShortFilmErrorKind::Json(_)
            | ShortFilmErrorKind::Storage(_)
            | ShortFilmErrorKind::Pipeline(_) => ErrorCategory::StageFatal,
        }
    }
}

impl RetryableError for ShortFilmError {
    fn is_retryable(&self) -> bool {
        match self.kind() {
            ShortFilmErrorKind::Provider(e) => e.is_retryable(),
            _ => false,
        }
    }

    fn retry_after(&self) -> Option<Duration> {
        match self.kind() {
            ShortFilmErrorKind::Provider(e) => e.retry_after(),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to ShortFilmErrorKind
impl<T> From<T> for ShortFilmError
where
    T: Into<ShortFilmErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for shortfilm operations.
pub type ShortFilmResult<T> = std::result::Result<T, ShortFilmError>;
