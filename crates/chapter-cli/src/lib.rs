// NOTE: Layering
//
// chapter-types   content records, categories, resource names
// chapter-engine  pure listing logic: partition by date, paginate, timeline, roster
// chapter-runtime transports, last-request-wins loader, site context, config
// chapter (here)  argument parsing, handlers, presentation
//
// Handlers load content through the runtime, hand it to the engine with an
// explicit reference date, and pass the result to a presenter. Nothing below
// this crate prints.

mod args;
mod commands;
mod context;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat, ViewModeArgs};
pub use commands::run;
