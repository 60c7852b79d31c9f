use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Errors that can occur while invoking an external analyzer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The analyzer executable is missing or could not be started
    #[error("Failed to launch analyzer '{program}': {source}")]
    LaunchFailure {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The analyzer ran and exited with a non-zero status
    #[error("Analyzer exited with status {exit_code}: {stderr}")]
    ChildRuntimeFailure { exit_code: i32, stderr: String },

    /// The analyzer exited successfully but its output could not be decoded
    #[error("Analyzer protocol violation: {reason} (stdout: {stdout_snippet:?})")]
    ProtocolViolation {
        reason: String,
        stdout_snippet: String,
    },

    #[error("Analyzer '{program}' timed out after {after:?}")]
    Timeout { program: String, after: Duration },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("No analyzer configured for {}", .0.display())]
    UnsupportedFile(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Whether the error points at a mismatch between techlint and the analyzer
    /// rather than at the environment or the analyzed file.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, Error::ProtocolViolation { .. })
    }
}

/// Result type alias for techlint operations
pub type Result<T> = std::result::Result<T, Error>;
