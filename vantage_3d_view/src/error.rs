//! Error types for the Vantage3D view subsystem
//!
//! This module defines the error types used throughout the subsystem,
//! covering camera persistence and scene registry lookups.

use std::fmt;

/// Result type for view subsystem operations
pub type Result<T> = std::result::Result<T, Error>;

/// View subsystem errors
#[derive(Debug, Clone)]
pub enum Error {
    /// I/O failure while reading or writing persisted camera state
    Io(String),

    /// Scene registry lookup with a stale or unknown key
    SceneNotFound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::SceneNotFound(msg) => write!(f, "Scene not found: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(error.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
