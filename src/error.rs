//! Conversion pipeline errors.

use std::path::PathBuf;

/// Errors that abort a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Failed to open input {path}")]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create output {path}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read input")]
    Read(#[source] std::io::Error),

    #[error("Failed to write output")]
    Write(#[source] std::io::Error),
}
