use chapter_types::RecordId;
use serde::Serialize;
use std::fmt;

use super::common::PageViewModel;
use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct ActivityListViewModel {
    pub tag: Option<String>,
    pub total_activities: usize,
    pub entries: Vec<ActivityEntryViewModel>,
    pub page: PageViewModel,
}

#[derive(Debug, Serialize)]
pub struct ActivityEntryViewModel {
    pub id: RecordId,
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

impl CreateView for ActivityListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::activities::ActivityListView;
        Box::new(ActivityListView::new(self, mode))
    }
}

impl fmt::Display for ActivityListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
