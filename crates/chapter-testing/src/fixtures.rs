//! Sample content documents.
//!
//! Event dates are generated from day offsets against a reference date, so
//! a test pins `--today` to `REFERENCE_DATE` and knows exactly which records
//! are upcoming.

use chrono::{Duration, NaiveDate};
use serde_json::{Value, json};

/// Reference day used by fixtures and passed to the CLI as `--today`
pub const REFERENCE_DATE: &str = "2025-03-15";

/// Day offsets for the standard 14-event set: 9 upcoming, 5 past
pub const EVENT_OFFSETS: [i64; 14] = [3, -10, 0, 8, -1, 5, 2, -40, 7, 1, -3, 6, -365, 4];

const CATEGORIES: [&str; 5] = ["web", "cloud", "android", "ml", "hackathon"];

pub fn reference_date() -> NaiveDate {
    NaiveDate::parse_from_str(REFERENCE_DATE, "%Y-%m-%d").expect("valid reference date")
}

/// Events with ids `1..=offsets.len()`, categories cycling through
/// web, cloud, android, ml, hackathon.
pub fn events_around(reference: NaiveDate, offsets: &[i64]) -> Value {
    let events: Vec<Value> = offsets
        .iter()
        .enumerate()
        .map(|(i, offset)| {
            let id = i as i64 + 1;
            let date = reference + Duration::days(*offset);
            json!({
                "id": id,
                "title": format!("Event {}", id),
                "date": date.format("%Y-%m-%d").to_string(),
                "time": "6:00 PM",
                "venue": "Main Hall",
                "category": CATEGORIES[i % CATEGORIES.len()],
                "summary": format!("Summary of event {}", id),
                "registerUrl": format!("https://example.org/events/{}", id),
            })
        })
        .collect();
    Value::Array(events)
}

pub fn sample_events() -> Value {
    events_around(reference_date(), &EVENT_OFFSETS)
}

pub fn sample_activities() -> Value {
    json!([
        {"id": "a1", "title": "Compose workshop recap", "date": "2025-03-01", "tags": ["android", "recap"], "author": "Priya"},
        {"id": "a2", "title": "Cloud credits are live", "date": "2025-02-20", "tags": ["cloud"]},
        {"id": "a3", "title": "Hackathon winners", "date": "2025-02-10", "tags": ["hackathon", "recap"]},
        {"id": "a4", "title": "Intro to Gemini API", "date": "2025-01-28", "tags": ["ml"]},
        {"id": "a5", "title": "Web vitals deep dive", "date": "2025-01-15", "tags": ["web"]},
        {"id": "a6", "title": "Study jam kickoff", "date": "2025-01-05", "tags": ["cloud", "recap"]},
        {"id": "a7", "title": "Year in review", "date": "2024-12-30", "tags": ["recap"]}
    ])
}

pub fn sample_team() -> Value {
    json!([
        {"id": 1, "name": "Sam Rivera", "role": "Core Team", "socials": {"github": "https://github.com/sam"}},
        {"id": 2, "name": "Ada Lovelace King", "role": "Chapter Organizer", "bio": "Runs the chapter."},
        {"id": 3, "name": "Chen", "role": "Design Lead", "socials": {"linkedin": null}}
    ])
}

pub fn sample_faq() -> Value {
    json!([
        {"id": 1, "question": "Who can join?", "answer": "Anyone interested in building with technology."},
        {"id": 2, "question": "Are events free?", "answer": "Yes, all events are free."}
    ])
}

pub fn sample_site() -> Value {
    json!({
        "name": "Campus Developer Club",
        "tagline": "Learn, build, share",
        "email": "hello@example.org"
    })
}

pub fn sample_settings() -> Value {
    json!({
        "theme": "dark",
        "communityMetrics": {
            "eventsCompleted": 40,
            "totalMembers": 650
        }
    })
}

pub fn sample_social() -> Value {
    json!({
        "github": "https://github.com/example-club",
        "instagram": "https://instagram.com/example-club",
        "twitter": null
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_events_shape() {
        let events = sample_events();
        let events = events.as_array().unwrap();
        assert_eq!(events.len(), 14);
        assert_eq!(events[0]["date"], "2025-03-18");
        assert_eq!(events[2]["date"], REFERENCE_DATE);
        assert_eq!(events[5]["category"], "web");
    }
}
