// NOTE: Command Organization
//
// One flat subcommand per content page (events, activities, team, faq,
// timeline, site) plus `check`. Source selection, output format and the
// reference date are global so they can follow any subcommand.

mod commands;
mod common;

pub use commands::*;
pub use common::*;

use chrono::NaiveDate;
use clap::Parser;

#[derive(Parser)]
#[command(name = "chapter")]
#[command(about = "Browse a community chapter's events, activities and team from its JSON content", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to config.toml (defaults to $CHAPTER_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Directory holding <resource>.json files
    #[arg(long, global = true)]
    pub content_dir: Option<String>,

    /// Base URL serving <resource>.json files; takes precedence over --content-dir
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Reference date (YYYY-MM-DD) used to split upcoming from past; defaults to today
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    #[command(flatten)]
    pub view_mode: ViewModeArgs,

    #[command(subcommand)]
    pub command: Commands,
}
