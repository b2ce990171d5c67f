//! Error types for the workshop scanner and plugin installer

use std::path::PathBuf;
use thiserror::Error;

/// Error kinds that can occur while reading workshop items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// Permission denied when accessing a file or directory
    PermissionDenied,
    /// File or directory not found
    NotFound,
    /// I/O error during file operations
    IoError,
    /// Metadata file is not valid JSON or has mistyped fields
    ParseError,
    /// A required metadata field is absent
    MissingField,
}

/// Represents an error that occurred during scanning
#[derive(Debug, Error)]
#[error("{kind:?}: {message} (path: {path:?})")]
pub struct ScanError {
    /// The kind of error
    pub kind: ScanErrorKind,
    /// The path where the error occurred
    pub path: Option<PathBuf>,
    /// Human-readable error message
    pub message: String,
}

impl ScanError {
    /// Create a new scan error
    pub fn new(kind: ScanErrorKind, path: Option<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path,
            message: message.into(),
        }
    }

    /// Create an I/O error, classifying it by its `io::ErrorKind`
    pub fn io(path: PathBuf, err: &std::io::Error) -> Self {
        Self::new(classify_io(err), Some(path), err.to_string())
    }

    /// Create a metadata parse error
    pub fn parse_error(path: PathBuf, err: &serde_json::Error) -> Self {
        Self::new(ScanErrorKind::ParseError, Some(path), err.to_string())
    }

    /// Create a missing field error
    pub fn missing_field(path: PathBuf, field: &str) -> Self {
        Self::new(
            ScanErrorKind::MissingField,
            Some(path),
            format!("missing required field `{}`", field),
        )
    }
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        Self::new(classify_io(&err), None, err.to_string())
    }
}

impl From<walkdir::Error> for ScanError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf());
        let kind = match err.io_error() {
            Some(io) => classify_io(io),
            None => ScanErrorKind::IoError,
        };
        Self::new(kind, path, err.to_string())
    }
}

fn classify_io(err: &std::io::Error) -> ScanErrorKind {
    match err.kind() {
        std::io::ErrorKind::PermissionDenied => ScanErrorKind::PermissionDenied,
        std::io::ErrorKind::NotFound => ScanErrorKind::NotFound,
        _ => ScanErrorKind::IoError,
    }
}

/// Errors raised while installing the plugin
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Source plugin not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Could not determine the home directory")]
    NoHomeDir,

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk plugin tree: {0}")]
    Walk(#[from] walkdir::Error),
}

impl InstallError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InstallError::Io {
            path: path.into(),
            source,
        }
    }
}
