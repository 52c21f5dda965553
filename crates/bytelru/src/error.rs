//! Error types for bytelru

use std::fmt;

/// Result type alias for bytelru configuration
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a cache configuration.
///
/// Cache operations themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input is not a recognizable byte size
    InvalidSize(String),

    /// Byte size does not fit in `usize`
    SizeOverflow(String),

    /// Environment variable is set but unreadable
    Env {
        /// Variable name
        var: String,
        /// Why it could not be read
        reason: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSize(input) => write!(f, "Invalid byte size: {:?}", input),
            Error::SizeOverflow(input) => write!(f, "Byte size too large: {:?}", input),
            Error::Env { var, reason } => write!(f, "Cannot read {}: {}", var, reason),
        }
    }
}

impl std::error::Error for Error {}
