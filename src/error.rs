//! Error types and result aliases for maxstrip.
//!
//! This module defines the error handling infrastructure:
//! - [`StripError`]: every failure the library can report
//! - [`ErrorKind`]: coarse classification so callers can tell argument problems from I/O
//! - [`Result<T>`]: Type alias for `std::result::Result<T, StripError>` used throughout the crate

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StripError>;

/// Coarse error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid command-line input
    Argument,
    /// Failure opening, reading or writing the target
    Io,
    /// Unreadable, malformed or out-of-range configuration
    Config,
}

#[derive(Error, Debug)]
pub enum StripError {
    #[error("no input file path supplied")]
    MissingPath,

    #[error("input file path is empty")]
    EmptyPath,

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl StripError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StripError::Io {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            StripError::MissingPath | StripError::EmptyPath => ErrorKind::Argument,
            StripError::Io { .. } => ErrorKind::Io,
            StripError::ConfigRead { .. }
            | StripError::ConfigParse { .. }
            | StripError::InvalidConfig(_) => ErrorKind::Config,
        }
    }

    /// Process exit code for this error (1 = I/O failure, 2 = usage or configuration)
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::Io => 1,
            ErrorKind::Argument | ErrorKind::Config => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_errors() {
        assert_eq!(StripError::MissingPath.kind(), ErrorKind::Argument);
        assert_eq!(StripError::EmptyPath.kind(), ErrorKind::Argument);
        assert_eq!(StripError::MissingPath.exit_code(), 2);
    }

    #[test]
    fn test_io_error_message_includes_path() {
        let err = StripError::io(
            "missing.mac",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "missing.mac: No such file or directory");
    }

    #[test]
    fn test_invalid_config_kind() {
        let err = StripError::InvalidConfig("max_lines must be at least 1".to_string());
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.to_string().contains("max_lines"));
    }
}
