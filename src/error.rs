//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// A corpus record failed to decode
    #[error("Decode error at corpus index {index}: {source}")]
    Decode {
        /// Raw corpus index of the record that failed to decode.
        index: usize,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// A line total too small to split into randomized stanza groups
    #[error("Cannot split {total} lines into 3 or more stanzas of 4 or more lines")]
    InvalidSizing {
        /// The line total that could not be partitioned.
        total: usize,
    },
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a decode error for the record at the given corpus index
    pub const fn decode(index: usize, source: serde_json::Error) -> Self {
        Self::Decode { index, source }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn io_error_carries_path() {
        let err = Error::io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            std::path::PathBuf::from("poetry.json-stream.gz"),
        );
        assert!(err.to_string().contains("poetry.json-stream.gz"));
    }

    #[test]
    fn invalid_sizing_names_the_total() {
        let err = Error::InvalidSizing { total: 11 };
        assert!(err.to_string().contains("11 lines"));
    }
}
