//! Runtime layer for chapter: where content comes from and how it is loaded.
//!
//! - `transport`: local directory and HTTP sources answering `<name>.json`
//! - `loader`: tri-state, last-request-wins resource loading
//! - `context`: site-wide data loaded once and passed explicitly
//! - `config`: `config.toml` and content source resolution
//! - `scan`: inventory of a local content directory

pub mod config;
pub mod context;
pub mod error;
pub mod loader;
pub mod scan;
pub mod transport;

pub use config::{Config, ContentSource, expand_tilde, resolve_config_path};
pub use context::SiteContext;
pub use error::{Error, LoadError, Result};
pub use loader::{ContentLoader, LoadState, Snapshot, fetch_json};
pub use scan::{ContentInventory, scan_content_dir};
pub use transport::{Fetched, FsTransport, HttpTransport, Transport, TransportError};
