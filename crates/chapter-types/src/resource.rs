use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Named JSON documents served from the content root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Events,
    Team,
    Activities,
    Faq,
    Site,
    Settings,
    Social,
}

impl Resource {
    pub const ALL: [Resource; 7] = [
        Resource::Events,
        Resource::Team,
        Resource::Activities,
        Resource::Faq,
        Resource::Site,
        Resource::Settings,
        Resource::Social,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Resource::Events => "events",
            Resource::Team => "team",
            Resource::Activities => "activities",
            Resource::Faq => "faq",
            Resource::Site => "site",
            Resource::Settings => "settings",
            Resource::Social => "social",
        }
    }

    /// File name relative to the content root, e.g. `events.json`
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_end_matches(".json");
        Resource::ALL
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownResource(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_names() {
        assert_eq!(Resource::Events.file_name(), "events.json");
        assert_eq!("faq".parse::<Resource>().unwrap(), Resource::Faq);
        assert_eq!("social.json".parse::<Resource>().unwrap(), Resource::Social);
        assert!("blog".parse::<Resource>().is_err());
    }
}
