//! Checkpoint storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create the output root
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write the checkpoint document
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Failed to read the checkpoint document
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// Failed to remove the checkpoint document
    #[display("Failed to remove file: {}", _0)]
    FileRemove(String),
    /// Checkpoint exists but does not deserialize into a run state
    #[display("Corrupt checkpoint: {}", _0)]
    Corrupt(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use shortfilm_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Corrupt("state.json".to_string()));
/// assert!(format!("{}", err).contains("Corrupt"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
