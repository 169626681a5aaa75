//! Error types for the garden library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all garden operations.
#[derive(Error, Debug)]
pub enum GardenError {
    /// A log position that does not exist in the current log
    #[error("Log entry index {index} is out of range (log has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
    /// A log entry id that is not present in this session
    #[error("Log entry with ID {id} not found")]
    EntryNotFound { id: u64 },
    /// Layout section not found for the given name
    #[error("Section '{name}' not found")]
    SectionNotFound { name: String },
    /// Cell coordinates outside the section grid
    #[error("Cell ({row}, {col}) is outside section '{section}' ({rows}x{cols})")]
    CellOutOfRange {
        section: String,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Document parsed as JSON but does not have the garden shape
    #[error("Malformed garden document: {reason}")]
    MalformedDocument { reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> GardenError {
        GardenError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl GardenError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a malformed document error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            reason: reason.into(),
        }
    }

    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Whether the error came from a document that could not be read as a
    /// garden (bad JSON or wrong shape).
    pub fn is_malformed_document(&self) -> bool {
        matches!(
            self,
            Self::MalformedDocument { .. } | Self::Serialization { .. }
        )
    }
}

/// Extension trait for Result to map foreign errors into
/// [`GardenError::MalformedDocument`] with context.
pub trait ResultExt<T> {
    /// Add context to any error type, converting to GardenError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;

    /// Add lazy context to any error type, converting to GardenError.
    fn with_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| GardenError::malformed(format!("{context}: {e}")))
    }

    fn with_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| GardenError::malformed(format!("{}: {e}", f())))
    }
}

/// Result type alias for garden operations
pub type Result<T> = std::result::Result<T, GardenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = GardenError::invalid_input("plant").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'plant': must not be empty"
        );
    }

    #[test]
    fn test_with_context_maps_to_malformed() {
        let parsed: std::result::Result<u32, _> = "abc".parse::<u32>();
        let err = parsed.with_context("metrics.height_cm").unwrap_err();
        assert!(err.is_malformed_document());
        assert!(err.to_string().starts_with("Malformed garden document: metrics.height_cm"));
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = GardenError::IndexOutOfRange { index: 4, len: 2 };
        assert!(err.to_string().contains("index 4"));
        assert!(err.to_string().contains("2 entries"));
    }
}
