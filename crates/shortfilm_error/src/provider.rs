//! Media provider error types and retry classification.

use std::time::Duration;

/// Provider-specific error conditions.
///
/// The variants fall into three classes: transient (`Network`, `RateLimited`,
/// retryable `Http` statuses), capability-unavailable (`Unavailable`) and
/// authorization (`Unauthorized`, `MissingCredential`). Everything else is a
/// permanent failure of the request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Credential for the selected provider was not supplied
    #[display("{} environment variable not set", _0)]
    MissingCredential(String),
    /// Connection, timeout or transport failure before a response arrived
    #[display("Network error: {}", _0)]
    Network(String),
    /// Provider asked us to slow down
    #[display("Rate limited: {}", message)]
    RateLimited {
        /// Seconds the provider asked us to wait, if it said
        retry_after_secs: Option<u64>,
        /// Response body
        message: String,
    },
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Credential rejected by the provider
    #[display("Authorization failed: {}", _0)]
    Unauthorized(String),
    /// Model or endpoint not available to this account
    #[display("Capability unavailable: {}", _0)]
    Unavailable(String),
    /// The provider accepted the job but reported it failed
    #[display("Generation failed: {}", _0)]
    GenerationFailed(String),
    /// Response did not have the expected shape
    #[display("Invalid response: {}", _0)]
    InvalidResponse(String),
    /// Reading the seed image or writing the artifact failed
    #[display("I/O error: {}", _0)]
    Io(String),
}

impl ProviderErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderErrorKind::Http { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            ProviderErrorKind::Network(_) => true,
            ProviderErrorKind::RateLimited { .. } => true,
            _ => false,
        }
    }

    /// Delay the provider asked for before the next attempt, if any.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            ProviderErrorKind::RateLimited {
                retry_after_secs: Some(secs),
                ..
            } => Some(Duration::from_secs(*secs)),
            _ => None,
        }
    }

    /// Whether this is an authorization or credential problem.
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            ProviderErrorKind::Unauthorized(_) | ProviderErrorKind::MissingCredential(_)
        )
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use shortfilm_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::MissingCredential("GEMINI_API_KEY".into()));
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use shortfilm_error::{ProviderError, ProviderErrorKind, RetryableError};
///
/// let err = ProviderError::new(ProviderErrorKind::Http {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
/// assert!(err.is_retryable());
///
/// let err = ProviderError::new(ProviderErrorKind::Unauthorized("bad key".into()));
/// assert!(!err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient errors like 503 (service unavailable), 429 (rate limit),
    /// or network timeouts should return true. Permanent errors like 401
    /// (unauthorized) or 400 (bad request) should return false.
    fn is_retryable(&self) -> bool;

    /// Provider-requested delay before retrying, overriding the backoff schedule.
    fn retry_after(&self) -> Option<Duration> {
        None
    }
}

impl RetryableError for ProviderError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn retry_after(&self) -> Option<Duration> {
        self.kind.retry_after()
    }
}
