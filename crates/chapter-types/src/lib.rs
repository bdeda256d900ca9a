pub mod category;
pub mod content;
pub mod error;
pub mod record;
pub mod resource;

pub use category::{CategoryFilter, EventCategory};
pub use content::{
    Activity, CommunityMetrics, Event, FaqEntry, Settings, SiteInfo, SocialLinks, TeamMember,
};
pub use error::{Error, Result};
pub use record::{Dated, InvalidDate, RecordId, parse_calendar_date};
pub use resource::Resource;
