//! # Presentation Layer
//!
//! Data flows one way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                                                                  ==(Text)==> [ View ] --> stdout
//! ```
//!
//! ## Rules
//!
//! * `view_models/` hold raw data (dates, counts, ids), never pre-formatted
//!   strings. `--format json` prints them as-is and ignores the view mode.
//! * `presenters/` convert engine output into view models and decide which
//!   badge and tips to attach.
//! * `views/` implement `fmt::Display` per `ViewMode` and call `formatters/`
//!   for dates and text.
//! * `renderers/` pick JSON or text and apply console styling.
//!
//! `ViewMode` sets information density:
//! * **Minimal:** ids only, for pipes and scripts
//! * **Compact:** one line per item
//! * **Standard:** grouped sections with page controls (default)
//! * **Verbose:** every field, including links and raw values

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};
