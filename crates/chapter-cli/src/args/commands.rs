use chapter_types::CategoryFilter;
use clap::Subcommand;
use std::num::NonZeroUsize;

#[derive(Subcommand)]
pub enum Commands {
    /// List upcoming and past events, each paged separately
    Events {
        /// Category to show (web, android, cloud, ml, hackathon, ... or all)
        #[arg(long, default_value = "all")]
        category: CategoryFilter,

        #[arg(long, default_value_t = 1)]
        upcoming_page: usize,

        #[arg(long, default_value_t = 1)]
        past_page: usize,

        /// Items per page (defaults to the config value, then 6)
        #[arg(long)]
        page_size: Option<NonZeroUsize>,
    },

    /// List activity posts
    Activities {
        /// Only show posts carrying this tag
        #[arg(long)]
        tag: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long)]
        page_size: Option<NonZeroUsize>,
    },

    /// Show the team roster, organizer first
    Team,

    /// Show frequently asked questions
    Faq,

    /// Home page timeline: all upcoming events and the most recent past ones
    Timeline,

    /// Show site info, settings and social links
    Site,

    /// Validate every content document and report unreadable dates
    Check,
}
