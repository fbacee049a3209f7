//! Error types for frame operations
//!
//! Provides unified error handling for loading, building, indexing and
//! transforming frames.

use crate::types::ElementType;
use std::path::PathBuf;
use thiserror::Error;

/// Classification of a [`FrameError`], for callers that branch on the kind
/// rather than match on the full error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    EmptyInput,
    Format,
    Schema,
    TypeCoercion,
    Index,
    InvalidArgument,
    Io,
}

/// Axis a positional lookup was made on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Errors that can occur during frame operations
#[derive(Error, Debug)]
pub enum FrameError {
    /// Input path does not exist
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// No header or no data rows
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Irregular row shape
    #[error("Format error: {0}")]
    Format(String),

    /// Duplicate or unknown column names
    #[error("Schema error: {0}")]
    Schema(String),

    /// A cell cannot be converted to the requested type
    #[error("Cannot convert {value:?} in column '{column}' to {target}")]
    TypeCoercion {
        column: String,
        value: String,
        target: ElementType,
    },

    /// Positional access outside the valid range
    #[error("{axis} position {position} is out of bounds for length {len}")]
    Index {
        axis: Axis,
        position: i64,
        len: usize,
    },

    /// Argument outside its accepted domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
}

impl FrameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FrameError::NotFound { .. } => ErrorKind::NotFound,
            FrameError::EmptyInput(_) => ErrorKind::EmptyInput,
            FrameError::Format(_) | FrameError::Csv(_) => ErrorKind::Format,
            FrameError::Schema(_) => ErrorKind::Schema,
            FrameError::TypeCoercion { .. } => ErrorKind::TypeCoercion,
            FrameError::Index { .. } => ErrorKind::Index,
            FrameError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            FrameError::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result type alias for frame operations
pub type FrameResult<T> = Result<T, FrameError>;
