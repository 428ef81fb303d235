//! Error types for the code splitter.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the code splitter library.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The input source file does not exist.
    #[error("Can't find input file {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// The input source file exists but could not be opened for reading.
    #[error("Can't open input file {}: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `def`/`class` line without an identifier after the keyword.
    #[error("Malformed definition on line {line_number}: '{line}'")]
    MalformedDefinition { line_number: usize, line: String },

    /// The output folder could not be created.
    #[error("Failed to create output folder {}: {source}", .path.display())]
    CreateFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating, writing or flushing an output file failed.
    #[error("Failed to write output file {path}: {source}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error while reading the input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SplitError {
    /// Whether the input file itself was unavailable.
    ///
    /// These failures are reported and swallowed by [`crate::split_code`].
    #[must_use]
    pub fn is_input_unavailable(&self) -> bool {
        matches!(self, Self::InputNotFound { .. } | Self::OpenInput { .. })
    }
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitError>;
