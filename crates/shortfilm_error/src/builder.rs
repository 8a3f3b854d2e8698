//! Errors from incomplete option builders.

/// What was wrong with the builder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BuilderErrorKind {
    /// A required value was never supplied
    #[display("Required option missing: {}", _0)]
    MissingField(String),
}

/// Builder error with location tracking.
///
/// # Examples
///
/// ```
/// use shortfilm_error::{BuilderError, BuilderErrorKind, ErrorCategory, ShortFilmError};
///
/// let err = BuilderError::new(BuilderErrorKind::MissingField("output_root".into()));
/// assert!(format!("{}", err).contains("output_root"));
///
/// let err: ShortFilmError = err.into();
/// assert_eq!(err.category(), ErrorCategory::Configuration);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", kind, line, file)]
pub struct BuilderError {
    /// The kind of error that occurred
    pub kind: BuilderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl BuilderError {
    /// Create a new builder error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
