//! Error types for jsonify operations.
//!
//! The converters and the facade never fail: malformed input is reported
//! through the shape of the returned string. [`JsonifyError`] covers the
//! operations around them, such as reading input, resolving a format, and
//! reformatting output.
//!
//! # Example
//!
//! ```rust
//! use jsonify_core::{Format, JsonifyError};
//!
//! match "pdf".parse::<Format>() {
//!     Ok(format) => println!("Converting {}", format.label()),
//!     Err(JsonifyError::UnsupportedFormat(tag)) => println!("No converter for {}", tag),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for jsonify operations.
#[derive(Error, Debug)]
pub enum JsonifyError {
    /// The format tag does not name a known converter.
    ///
    /// Holds the tag exactly as the caller wrote it.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// No format could be inferred from a file path.
    #[error("Could not detect format for file: {}", .path.display())]
    UnknownFormat { path: PathBuf },

    /// File not found.
    ///
    /// Returned when attempting to read a file that doesn't exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Read or write failures on files and stdin.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Converter output could not be parsed as JSON.
    ///
    /// Verbatim output is not escaped, so a value holding a quote makes
    /// the whole document unparseable.
    #[error("Output is not valid JSON: {0}")]
    InvalidJson(String),
}

/// Result type alias for JsonifyError.
pub type Result<T> = std::result::Result<T, JsonifyError>;
