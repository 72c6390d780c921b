//! Error types for Stencil

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Stencil operations
pub type Result<T> = std::result::Result<T, StencilError>;

/// Main error type for Stencil
#[derive(Error, Debug)]
pub enum StencilError {
    /// Command-line input validation errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Validation errors for command-line input
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("'{}' does not exist", .0.display())]
    NotAFile(PathBuf),
}

/// Specialized result type for validation operations
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
