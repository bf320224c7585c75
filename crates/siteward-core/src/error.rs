//! Error types for the Siteward tools.
//!
//! All errors in the workspace are represented by the [`Error`] enum.
//! This ensures composable error handling across crates.

use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// The core error type for all Siteward operations.
#[derive(ThisError, Debug)]
pub enum Error {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Named input file does not exist
    #[error("Not a valid file: {path}")]
    FileNotFound { path: PathBuf },

    /// Front matter or document structure could not be parsed
    #[error("Parse error: {reason}")]
    Parse { reason: String },

    /// Invalid configuration
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// Remote asset could not be fetched
    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Error::FileNotFound { path: path.into() }
    }

    /// Create a parse error
    pub fn parse(reason: impl Into<String>) -> Self {
        Error::Parse {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }

    /// Create a fetch error
    pub fn fetch(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Fetch {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
