use chapter_types::RecordId;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct FaqViewModel {
    pub entries: Vec<FaqEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct FaqEntryViewModel {
    pub id: RecordId,
    pub question: String,
    pub answer: String,
}

impl CreateView for FaqViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::faq::FaqView;
        Box::new(FaqView::new(self, mode))
    }
}

impl fmt::Display for FaqViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
