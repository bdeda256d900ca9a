//! Where content bytes come from.
//!
//! A transport answers "give me `<name>.json`" with a status code and a body,
//! the same shape a static file server would. The loader decides what a status
//! means; transports only report it.

mod fs;
mod http;

pub use fs::FsTransport;
pub use http::HttpTransport;

use chapter_types::Resource;
use futures::future::BoxFuture;
use std::fmt;

/// Raw transport answer for one resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Fetched {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a status (connection refused, I/O failure, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TransportError {}

pub trait Transport: Send + Sync {
    fn fetch(&self, resource: Resource) -> BoxFuture<'_, Result<Fetched, TransportError>>;

    /// Human-readable location, for logs and `check` output
    fn describe(&self) -> String;
}
