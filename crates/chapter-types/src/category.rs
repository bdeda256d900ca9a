use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

const DEFAULT_COLOR: &str = "#6B7280";

/// Event category as written in `events.json`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventCategory {
    Web,
    Android,
    Cloud,
    Ml,
    Hackathon,
    Workshop,
    Other(String),
}

impl EventCategory {
    /// Categories offered by the event filter, in display order
    pub const FILTERABLE: [EventCategory; 5] = [
        EventCategory::Hackathon,
        EventCategory::Android,
        EventCategory::Web,
        EventCategory::Cloud,
        EventCategory::Ml,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            EventCategory::Web => "web",
            EventCategory::Android => "android",
            EventCategory::Cloud => "cloud",
            EventCategory::Ml => "ml",
            EventCategory::Hackathon => "hackathon",
            EventCategory::Workshop => "workshop",
            EventCategory::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            EventCategory::Web => "Web Development",
            EventCategory::Android => "Android & Mobile",
            EventCategory::Cloud => "Cloud Computing",
            EventCategory::Ml => "Machine Learning",
            EventCategory::Hackathon => "Hackathon",
            EventCategory::Workshop => "Workshop",
            EventCategory::Other(s) => s,
        }
    }

    /// Hex colour token for badges
    pub fn color(&self) -> &'static str {
        match self {
            EventCategory::Web => "#4285F4",
            EventCategory::Android => "#34A853",
            EventCategory::Cloud => "#FBBC04",
            EventCategory::Ml => "#EA4335",
            EventCategory::Hackathon => "#9334E6",
            EventCategory::Workshop => "#A855F7",
            EventCategory::Other(_) => DEFAULT_COLOR,
        }
    }
}

impl From<String> for EventCategory {
    fn from(s: String) -> Self {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "web" => EventCategory::Web,
            "android" => EventCategory::Android,
            "cloud" => EventCategory::Cloud,
            "ml" => EventCategory::Ml,
            "hackathon" => EventCategory::Hackathon,
            "workshop" => EventCategory::Workshop,
            _ => EventCategory::Other(normalized),
        }
    }
}

impl From<&str> for EventCategory {
    fn from(s: &str) -> Self {
        EventCategory::from(s.to_string())
    }
}

impl From<EventCategory> for String {
    fn from(category: EventCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category selection applied before partitioning; `all` matches everything
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(EventCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: &EventCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All Events",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidCategory(s.to_string()));
        }
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Ok(CategoryFilter::Only(EventCategory::from(trimmed)))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip_through_serde() {
        let parsed: Vec<EventCategory> =
            serde_json::from_str(r#"["web", "ML", "design-sprint"]"#).unwrap();
        assert_eq!(parsed[0], EventCategory::Web);
        assert_eq!(parsed[1], EventCategory::Ml);
        assert_eq!(
            parsed[2],
            EventCategory::Other("design-sprint".to_string())
        );

        let json = serde_json::to_string(&parsed).unwrap();
        assert_eq!(json, r#"["web","ml","design-sprint"]"#);
    }

    #[test]
    fn test_filter_parse_and_match() {
        let all: CategoryFilter = "ALL".parse().unwrap();
        assert!(all.matches(&EventCategory::Cloud));

        let web: CategoryFilter = "web".parse().unwrap();
        assert!(web.matches(&EventCategory::Web));
        assert!(!web.matches(&EventCategory::Android));

        assert!("  ".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_unknown_category_matches_regardless_of_case() {
        let filter: CategoryFilter = "Meetup".parse().unwrap();
        assert!(filter.matches(&EventCategory::from(" meetup ")));
        assert!(filter.matches(&EventCategory::from("MEETUP")));
        assert_eq!(filter.to_string(), "meetup");
    }

    #[test]
    fn test_unknown_category_uses_default_color() {
        let other = EventCategory::from("meetup");
        assert_eq!(other.color(), DEFAULT_COLOR);
        assert_eq!(other.label(), "meetup");
    }
}
