//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! file access, truncated or malformed field files, shape mismatches, invalid render
//! configuration, display backend failures, and IO.
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Section of a field file being decoded when a read came up short.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Header,
    XAxis,
    YAxis,
    Grid,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Header => "header",
            Stage::XAxis => "x axis",
            Stage::YAxis => "y axis",
            Stage::Grid => "grid",
        };
        f.write_str(name)
    }
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot access '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("truncated field file while reading {stage}: expected {expected} bytes, found {actual}")]
    Truncated {
        stage: Stage,
        expected: usize,
        actual: usize,
    },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("shape mismatch: {0}")]
    Shape(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_message_names_stage_and_counts() {
        let err = Error::Truncated {
            stage: Stage::YAxis,
            expected: 12,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "truncated field file while reading y axis: expected 12 bytes, found 4"
        );
    }

    #[test]
    fn file_access_keeps_source() {
        let err = Error::FileAccess {
            path: PathBuf::from("missing.dat"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("cannot access 'missing.dat'"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
