//! Error types for the shortfilm pipeline.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Every error also maps onto one [`ErrorCategory`], which decides how far it
//! propagates: configuration and stage-fatal errors end the run, clip-local
//! errors are recorded on the clip, transient errors are retried by the
//! provider adapter first.
//!
//! # Examples
//!
//! ```
//! use shortfilm_error::{ConfigError, ErrorCategory, ShortFilmResult};
//!
//! fn check() -> ShortFilmResult<()> {
//!     Err(ConfigError::new("OPENAI_API_KEY is not set"))?
//! }
//!
//! let err = check().unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::Configuration);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod category;
mod config;
mod error;
mod json;
mod media;
mod pipeline;
mod provider;
mod storage;

pub use builder::{BuilderError, BuilderErrorKind};
pub use category::ErrorCategory;
pub use config::ConfigError;
pub use error::{ShortFilmError, ShortFilmErrorKind, ShortFilmResult};
pub use json::JsonError;
pub use media::{MediaToolError, MediaToolErrorKind};
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use provider::{ProviderError, ProviderErrorKind, RetryableError};
pub use storage::{StorageError, StorageErrorKind};
