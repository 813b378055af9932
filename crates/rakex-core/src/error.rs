//! Error types for keyword extraction.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading or compiling stopwords.
#[derive(Debug, Error)]
pub enum Error {
    /// The stopword file could not be read.
    #[error("failed to read stopword file {path}: {source}")]
    ReadStopwords {
        /// Path to the stopword file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The boundary pattern built from stopwords and stop tags failed to compile.
    #[error("failed to compile stopword pattern: {0}")]
    CompilePattern(#[from] regex::Error),
}
