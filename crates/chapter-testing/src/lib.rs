//! Testing infrastructure for chapter integration tests.
//!
//! - `TestWorld`: fluent setup of an isolated content directory plus CLI runs
//! - `fixtures`: sample content documents, dated relative to a reference day
//! - `assertions`: checks against the CLI's JSON output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
