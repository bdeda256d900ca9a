use chapter_types::RecordId;
use serde::Serialize;
use std::fmt;

use super::site::SocialLinkViewModel;
use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct TeamViewModel {
    pub total_members: usize,
    pub lead: Option<MemberViewModel>,
    pub members: Vec<MemberViewModel>,
}

#[derive(Debug, Serialize)]
pub struct MemberViewModel {
    pub id: RecordId,
    pub name: String,
    pub initials: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub socials: Vec<SocialLinkViewModel>,
}

impl CreateView for TeamViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::team::TeamView;
        Box::new(TeamView::new(self, mode))
    }
}

impl fmt::Display for TeamViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
