pub mod activities;
pub mod check;
pub mod common;
pub mod events;
pub mod faq;
pub mod result;
pub mod site;
pub mod team;
pub mod timeline;

use std::fmt;

pub use activities::{ActivityEntryViewModel, ActivityListViewModel};
pub use check::{CheckStatus, CheckViewModel, ResourceCheckViewModel};
pub use common::{Guidance, OutputFormat, PageViewModel, StatusBadge, StatusLevel, ViewMode};
pub use events::{EventEntryViewModel, EventListViewModel, EventPageViewModel, RejectedRecordViewModel};
pub use faq::{FaqEntryViewModel, FaqViewModel};
pub use result::CommandResultViewModel;
pub use site::{MetricsViewModel, SiteViewModel, SocialLinkViewModel};
pub use team::{MemberViewModel, TeamViewModel};
pub use timeline::TimelineViewModel;

/// Bridge from a view model to the `Display` view for a given density.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
