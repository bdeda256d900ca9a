use serde::Serialize;
use std::fmt;

use super::events::RejectedRecordViewModel;
use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct CheckViewModel {
    pub source: String,
    pub resources: Vec<ResourceCheckViewModel>,
    pub rejected: Vec<RejectedRecordViewModel>,
    /// JSON files in the content dir that no resource maps to
    pub unknown_files: Vec<String>,
}

impl CheckViewModel {
    pub fn failed_count(&self) -> usize {
        self.resources
            .iter()
            .filter(|r| r.status != CheckStatus::Ok)
            .count()
    }
}

#[derive(Debug, Serialize)]
pub struct ResourceCheckViewModel {
    pub resource: String,
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Missing,
    Invalid,
}

impl CreateView for CheckViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::check::CheckView;
        Box::new(CheckView::new(self, mode))
    }
}

impl fmt::Display for CheckViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
