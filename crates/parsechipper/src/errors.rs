//! # Error Types

use std::path::PathBuf;

/// Errors from parsechipper operations.
#[derive(Debug, thiserror::Error)]
pub enum ParsechipperError {
    /// The vocabulary source could not be opened or read.
    #[error("failed to read vocabulary {path:?}: {source}")]
    VocabRead {
        /// The path which failed.
        path: PathBuf,

        /// The underlying io error.
        #[source]
        source: std::io::Error,
    },

    /// No vocabulary path was given, and no default could be resolved.
    #[error("no vocabulary path given and no default vocabulary could be resolved")]
    NoDefaultVocab,

    /// The normalization version is not one of the known rule sets.
    #[error("unsupported normalization version: {version}")]
    UnsupportedVersion {
        /// The requested version.
        version: u32,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for parsechipper operations.
pub type PCResult<T> = core::result::Result<T, ParsechipperError>;
