use std::fmt;

use crate::record::InvalidDate;

/// Result type for chapter-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Resource name does not map to a known content file
    UnknownResource(String),

    /// Category filter could not be parsed
    InvalidCategory(String),

    /// A record carries a date that is not a calendar date
    InvalidDate(InvalidDate),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownResource(name) => write!(f, "Unknown resource: {}", name),
            Error::InvalidCategory(name) => write!(f, "Invalid category: {}", name),
            Error::InvalidDate(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidDate(err) => Some(err),
            Error::UnknownResource(_) | Error::InvalidCategory(_) => None,
        }
    }
}

impl From<InvalidDate> for Error {
    fn from(err: InvalidDate) -> Self {
        Error::InvalidDate(err)
    }
}
