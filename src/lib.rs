//! Stencil - a starting point for command-line tools
//!
//! Stencil is a template for small command-line programs: it parses a common
//! set of arguments, validates the input path, wires up logging, and hands
//! control to a placeholder routine meant to be replaced with real logic.

// Public modules
pub mod cli;
pub mod error;
pub mod logging;
pub mod program;
pub mod ui;

// Re-export commonly used types
pub use error::{Result, StencilError, ValidationError};

/// Current version of Stencil
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
