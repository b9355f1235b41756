//! Error types for paper loading and document assembly

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while assembling or serializing a document
#[derive(Error, Debug)]
pub enum BuildError {
    /// A table row does not match the header cell count.
    ///
    /// Raised before anything is appended to the document, so a failed
    /// build never leaves a partially emitted table behind.
    #[error("table '{caption}': row {row} has {actual} cells, expected {expected} to match the header")]
    RowShape {
        /// Caption of the offending table
        caption: String,
        /// 1-based data row index
        row: usize,
        /// Header cell count
        expected: usize,
        /// Actual cell count of the row
        actual: usize,
    },

    /// IO error, e.g. the output destination cannot be written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The docx serializer failed to pack the document
    #[error("failed to write DOCX: {0}")]
    Docx(String),
}

/// Errors that can occur when loading paper content or configuration files
#[derive(Error, Debug)]
pub enum PaperError {
    /// IO error when reading the file
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Error parsing TOML
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Path that could not be parsed
        path: PathBuf,
        /// Underlying TOML error
        source: Box<toml::de::Error>,
    },
}
