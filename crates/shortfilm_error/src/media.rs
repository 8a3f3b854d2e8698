//! Frame extraction and concatenation tool errors.

/// Media tool error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MediaToolErrorKind {
    /// External tool is not installed or not on PATH
    #[display("{} not found in PATH", _0)]
    ToolMissing(String),
    /// An input artifact does not exist
    #[display("Input not found: {}", _0)]
    InputMissing(String),
    /// The video decoded to zero frames
    #[display("No decodable frames in {}", _0)]
    NoFrames(String),
    /// The tool ran but exited unsuccessfully
    #[display("Command '{}' failed ({}): {}", command, status, stderr)]
    CommandFailed {
        /// Rendered command line
        command: String,
        /// Exit status description
        status: String,
        /// Captured standard error
        stderr: String,
    },
    /// Filesystem error around the tool invocation
    #[display("I/O error: {}", _0)]
    Io(String),
}

/// Media tool error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Media Tool Error: {} at line {} in {}", kind, line, file)]
pub struct MediaToolError {
    /// The kind of error that occurred
    pub kind: MediaToolErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MediaToolError {
    /// Create a new media tool error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MediaToolErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
