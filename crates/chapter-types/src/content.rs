//! Schemas for the JSON documents under the content root.
//!
//! Only the fields the toolkit reasons about are typed; everything else is kept
//! in an `extra` map so records round-trip without losing display data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::category::EventCategory;
use crate::record::{Dated, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "crate::record::lenient_date")]
    pub date: String,
    pub category: EventCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dated for Event {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn date_str(&self) -> &str {
        &self.date
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "crate::record::lenient_date")]
    pub date: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Activity {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

impl Dated for Activity {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn date_str(&self) -> &str {
        &self.date
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: RecordId,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub socials: BTreeMap<String, Option<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: RecordId,
    pub question: String,
    pub answer: String,
}

/// Free-form site description (`site.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteInfo(pub Map<String, Value>);

impl SiteInfo {
    /// Site name, read from `name` or `title`
    pub fn name(&self) -> Option<&str> {
        self.str_field("name").or_else(|| self.str_field("title"))
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

fn default_theme() -> String {
    "light".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub community_metrics: CommunityMetrics,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            community_metrics: CommunityMetrics::default(),
            extra: Map::new(),
        }
    }
}

/// Headline counters; missing values fall back to the site's published figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityMetrics {
    #[serde(default = "CommunityMetrics::default_events_completed")]
    pub events_completed: u32,
    #[serde(default = "CommunityMetrics::default_total_members")]
    pub total_members: u32,
    #[serde(default = "CommunityMetrics::default_bootcamps_held")]
    pub bootcamps_held: u32,
    #[serde(default = "CommunityMetrics::default_awards_won")]
    pub awards_won: u32,
}

impl CommunityMetrics {
    fn default_events_completed() -> u32 {
        25
    }

    fn default_total_members() -> u32 {
        500
    }

    fn default_bootcamps_held() -> u32 {
        8
    }

    fn default_awards_won() -> u32 {
        3
    }
}

impl Default for CommunityMetrics {
    fn default() -> Self {
        Self {
            events_completed: Self::default_events_completed(),
            total_members: Self::default_total_members(),
            bootcamps_held: Self::default_bootcamps_held(),
            awards_won: Self::default_awards_won(),
        }
    }
}

/// Platform name to profile URL (`social.json`); null or empty URLs are hidden
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialLinks(pub BTreeMap<String, Option<String>>);

impl SocialLinks {
    pub fn get(&self, platform: &str) -> Option<&str> {
        self.0
            .get(platform)
            .and_then(|url| url.as_deref())
            .filter(|url| !url.trim().is_empty())
    }

    /// Links with a usable URL, sorted by platform name
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().filter_map(|(platform, url)| {
            url.as_deref()
                .filter(|u| !u.trim().is_empty())
                .map(|u| (platform.as_str(), u))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_keeps_unknown_fields() {
        let json = r#"{
            "id": 3,
            "title": "Study Jam",
            "date": "2024-05-02",
            "category": "cloud",
            "registerUrl": "https://example.org/r",
            "speaker": "Ada"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.category, EventCategory::Cloud);
        assert_eq!(event.register_url.as_deref(), Some("https://example.org/r"));
        assert_eq!(event.extra.get("speaker"), Some(&Value::from("Ada")));

        let back = serde_json::to_value(&event).unwrap();
        assert_eq!(back["speaker"], "Ada");
        assert_eq!(back["registerUrl"], "https://example.org/r");
    }

    #[test]
    fn test_event_requires_category() {
        let json = r#"{"id": 1, "title": "x", "date": "2024-05-02"}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }

    #[test]
    fn test_settings_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.community_metrics.total_members, 500);

        let settings: Settings =
            serde_json::from_str(r#"{"theme":"dark","communityMetrics":{"awardsWon":5}}"#)
                .unwrap();
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.community_metrics.awards_won, 5);
        assert_eq!(settings.community_metrics.events_completed, 25);
    }

    #[test]
    fn test_social_links_skip_empty() {
        let links: SocialLinks = serde_json::from_str(
            r#"{"github":"https://github.com/x","discord":null,"twitter":""}"#,
        )
        .unwrap();
        assert_eq!(links.get("github"), Some("https://github.com/x"));
        assert_eq!(links.get("discord"), None);
        assert_eq!(links.get("twitter"), None);
        assert_eq!(links.links().count(), 1);
    }

    #[test]
    fn test_site_name_fallback() {
        let site: SiteInfo = serde_json::from_str(r#"{"title":"GDG On Campus"}"#).unwrap();
        assert_eq!(site.name(), Some("GDG On Campus"));
    }
}
