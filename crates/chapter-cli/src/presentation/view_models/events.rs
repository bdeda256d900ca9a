use chapter_types::RecordId;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::common::PageViewModel;
use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct EventListViewModel {
    pub category: String,
    pub category_label: String,
    pub reference_date: NaiveDate,
    pub total_events: usize,
    pub filtered_count: usize,
    pub upcoming: EventPageViewModel,
    pub past: EventPageViewModel,
    pub rejected: Vec<RejectedRecordViewModel>,
}

#[derive(Debug, Serialize)]
pub struct EventPageViewModel {
    pub entries: Vec<EventEntryViewModel>,
    pub page: PageViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventEntryViewModel {
    pub id: RecordId,
    pub title: String,
    pub date: NaiveDate,
    /// Signed day distance from the reference date
    pub days_from_reference: i64,
    pub category: String,
    pub category_label: String,
    pub category_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RejectedRecordViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    pub id: RecordId,
    pub value: String,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for EventListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::events::EventListView;
        Box::new(EventListView::new(self, mode))
    }
}

// --------------------------------------------------------
// Display Trait (default rendering)
// --------------------------------------------------------

impl fmt::Display for EventListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
