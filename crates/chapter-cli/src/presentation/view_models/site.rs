use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct SiteViewModel {
    pub name: Option<String>,
    pub theme: String,
    pub metrics: MetricsViewModel,
    pub social: Vec<SocialLinkViewModel>,
    /// Every field of site.json as served
    pub site: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct MetricsViewModel {
    pub events_completed: u32,
    pub total_members: u32,
    pub bootcamps_held: u32,
    pub awards_won: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLinkViewModel {
    pub platform: String,
    pub url: String,
}

impl CreateView for SiteViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::site::SiteView;
        Box::new(SiteView::new(self, mode))
    }
}

impl fmt::Display for SiteViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
