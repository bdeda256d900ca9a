use chapter_types::Resource;
use std::fmt;

use crate::transport::TransportError;

/// Result type for chapter-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// A content resource could not be loaded
    Load(LoadError),

    /// A transport could not be constructed
    Transport(TransportError),

    /// Types layer error
    Types(chapter_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Load(err) => write!(f, "Load error: {}", err),
            Error::Transport(err) => write!(f, "Transport error: {}", err),
            Error::Types(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Load(err) => Some(err),
            Error::Transport(err) => Some(err),
            Error::Types(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Error::Load(err)
    }
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Error::Transport(err)
    }
}

impl From<chapter_types::Error> for Error {
    fn from(err: chapter_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Failure to fetch or decode one named resource.
///
/// Carries rendered messages rather than source errors so it can be cloned
/// into a load state and shown as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Transport answered with a non-success status
    Status { resource: Resource, status: u16 },

    /// Transport could not complete the request
    Transport { resource: Resource, message: String },

    /// Payload is not valid JSON for the expected shape
    Parse { resource: Resource, message: String },
}

impl LoadError {
    pub fn resource(&self) -> Resource {
        match self {
            LoadError::Status { resource, .. }
            | LoadError::Transport { resource, .. }
            | LoadError::Parse { resource, .. } => *resource,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Status { status: 404, .. })
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Status { resource, status } => {
                write!(f, "Failed to load {} (status {})", resource, status)
            }
            LoadError::Transport { resource, message } => {
                write!(f, "Failed to load {}: {}", resource, message)
            }
            LoadError::Parse { resource, message } => {
                write!(f, "Failed to parse {}: {}", resource, message)
            }
        }
    }
}

impl std::error::Error for LoadError {}
