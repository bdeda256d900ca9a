use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::events::{EventEntryViewModel, RejectedRecordViewModel};
use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct TimelineViewModel {
    pub reference_date: NaiveDate,
    pub upcoming: Vec<EventEntryViewModel>,
    pub recent_past: Vec<EventEntryViewModel>,
    /// Past events beyond the shown window
    pub hidden_past: usize,
    pub rejected: Vec<RejectedRecordViewModel>,
}

impl CreateView for TimelineViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::timeline::TimelineView;
        Box::new(TimelineView::new(self, mode))
    }
}

impl fmt::Display for TimelineViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
