//! Error types for grid operations

use std::io;
use thiserror::Error;

/// Result type for grid operations
pub type Result<T> = std::result::Result<T, GridError>;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Index {index} out of range for grid with {size} cells")]
    OutOfRange { index: usize, size: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl GridError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        GridError::Parse {
            line,
            message: message.into(),
        }
    }
}
