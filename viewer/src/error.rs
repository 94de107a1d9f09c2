//! Error types for the catalog viewer.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use catalog::{FilterParseError, FixtureError, IntegrityError};
use thiserror::Error;

/// Errors surfaced while loading, rendering or writing the catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    /// Settings could not be loaded from the environment or config files.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration failure.
        message: String,
    },
    /// The command line could not be parsed.
    #[error("{message}")]
    Usage {
        /// Parser output, including the usage hint.
        message: String,
    },
    /// A configured path is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// The rejected path.
        path: PathBuf,
    },
    /// A directory could not be opened.
    #[error("failed to open directory '{path}': {message}")]
    OpenDir {
        /// Directory that failed to open.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
    /// A path that must name a file does not.
    #[error("'{path}' does not name a file")]
    NotAFile {
        /// The rejected path.
        path: Utf8PathBuf,
    },
    /// The fixture file could not be loaded.
    #[error("fixture error: {source}")]
    Fixtures {
        /// Underlying fixture error.
        #[from]
        source: FixtureError,
    },
    /// Fixture references do not resolve.
    #[error("catalog integrity error: {source}")]
    Integrity {
        /// Underlying integrity error.
        #[from]
        source: IntegrityError,
    },
    /// The `--user` selection is neither `All` nor a numeric id.
    #[error("invalid owner selection: {source}")]
    InvalidUser {
        /// Underlying parse error.
        #[from]
        source: FilterParseError,
    },
    /// The rendered page could not be written.
    #[error("failed to write '{path}': {message}")]
    WriteError {
        /// Destination that failed.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}
