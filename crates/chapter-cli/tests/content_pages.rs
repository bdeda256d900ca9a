use chapter_testing::assertions::{assert_success, ids_at};
use chapter_testing::{TestWorld, fixtures};
use chapter_types::Resource;
use serde_json::{Value, json};

fn ids(values: &[&str]) -> Vec<Value> {
    values.iter().map(|v| json!(v)).collect()
}

#[test]
fn test_activities_first_page() {
    let world = TestWorld::new().with_resource(Resource::Activities, fixtures::sample_activities());

    let result = world.run(&["activities", "--format", "json"]).unwrap();
    assert_success(&result).unwrap();

    let json = result.json().unwrap();
    assert_eq!(
        ids_at(&json, "/content/entries").unwrap(),
        ids(&["a1", "a2", "a3", "a4", "a5", "a6"])
    );
    assert_eq!(json["content"]["total_activities"], 7);
    assert_eq!(json["content"]["page"]["total_pages"], 2);
}

#[test]
fn test_activities_tag_filter_matches_case_insensitively() {
    let world = TestWorld::new().with_resource(Resource::Activities, fixtures::sample_activities());

    let result = world
        .run(&["activities", "--format", "json", "--tag", "Recap"])
        .unwrap();
    assert_success(&result).unwrap();

    let json = result.json().unwrap();
    assert_eq!(
        ids_at(&json, "/content/entries").unwrap(),
        ids(&["a1", "a3", "a6", "a7"])
    );
    assert_eq!(json["content"]["tag"], "Recap");
    assert_eq!(json["content"]["page"]["total_pages"], 1);
}

#[test]
fn test_activities_unknown_tag_suggests_clearing_it() {
    let world = TestWorld::new().with_resource(Resource::Activities, fixtures::sample_activities());

    let result = world.run(&["activities", "--tag", "rust"]).unwrap();
    assert_success(&result).unwrap();

    assert!(result.stdout().contains("No activities found."));
    assert!(result.stdout().contains("No activities tagged 'rust': chapter activities"));
}

#[test]
fn test_activities_next_page_command_quotes_tag() {
    let activities: Vec<Value> = (1..=7)
        .map(|i| {
            json!({
                "id": format!("s{}", i),
                "title": format!("Session {}", i),
                "date": format!("2025-01-{:02}", i),
                "tags": ["study jam"]
            })
        })
        .collect();
    let world = TestWorld::new().with_resource(Resource::Activities, Value::Array(activities));

    let result = world
        .run(&["activities", "--format", "json", "--tag", "study jam"])
        .unwrap();
    assert_success(&result).unwrap();

    let json = result.json().unwrap();
    assert_eq!(json["content"]["page"]["total_pages"], 2);
    assert_eq!(
        json["suggestions"][0]["command"],
        "chapter activities --tag 'study jam' --page 2"
    );
}

#[test]
fn test_team_puts_organizer_first() {
    let world = TestWorld::new().with_resource(Resource::Team, fixtures::sample_team());

    let result = world.run(&["team", "--format", "json"]).unwrap();
    assert_success(&result).unwrap();

    let json = result.json().unwrap();
    assert_eq!(json["content"]["total_members"], 3);
    assert_eq!(json["content"]["lead"]["name"], "Ada Lovelace King");
    assert_eq!(json["content"]["lead"]["initials"], "AL");

    let members = json["content"]["members"].as_array().unwrap();
    let names: Vec<&str> = members.iter().map(|m| m["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Sam Rivera", "Chen"]);

    // null social URLs are dropped
    assert_eq!(members[1]["socials"].as_array().unwrap().len(), 0);
    assert_eq!(members[0]["socials"][0]["platform"], "github");
}

#[test]
fn test_team_text_output() {
    let world = TestWorld::new().with_resource(Resource::Team, fixtures::sample_team());

    let result = world.run(&["team"]).unwrap();
    assert_success(&result).unwrap();

    let stdout = result.stdout();
    let lead = stdout.find("Ada Lovelace King").unwrap();
    let member = stdout.find("Sam Rivera").unwrap();
    assert!(lead < member);
    assert!(stdout.contains("[AL] Ada Lovelace King · Chapter Organizer"));
}

#[test]
fn test_faq() {
    let world = TestWorld::new().with_resource(Resource::Faq, fixtures::sample_faq());

    let result = world.run(&["faq"]).unwrap();
    assert_success(&result).unwrap();

    assert!(result.stdout().contains("Q: Who can join?"));
    assert!(result.stdout().contains("A: Yes, all events are free."));
}

#[test]
fn test_timeline_caps_past_events() {
    let reference = fixtures::reference_date();
    let events = fixtures::events_around(reference, &[-1, -2, -3, -4, -5, -6, -7, 2]);
    let world = TestWorld::new()
        .with_resource(Resource::Events, events)
        .with_today(fixtures::REFERENCE_DATE);

    let result = world.run(&["timeline", "--format", "json"]).unwrap();
    assert_success(&result).unwrap();

    let json = result.json().unwrap();
    assert_eq!(ids_at(&json, "/content/upcoming").unwrap(), vec![json!(8)]);
    assert_eq!(
        ids_at(&json, "/content/recent_past").unwrap(),
        vec![json!(1), json!(2), json!(3), json!(4), json!(5)]
    );
    assert_eq!(json["content"]["hidden_past"], 2);
}

#[test]
fn test_site_combines_three_documents() {
    let world = TestWorld::new().with_sample_content();

    let result = world.run(&["site", "--format", "json"]).unwrap();
    assert_success(&result).unwrap();

    let json = result.json().unwrap();
    let content = &json["content"];
    assert_eq!(content["name"], "Campus Developer Club");
    assert_eq!(content["theme"], "dark");
    assert_eq!(content["metrics"]["events_completed"], 40);
    assert_eq!(content["metrics"]["total_members"], 650);
    assert_eq!(content["metrics"]["bootcamps_held"], 8);
    assert_eq!(content["metrics"]["awards_won"], 3);

    let platforms: Vec<&str> = content["social"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["platform"].as_str().unwrap())
        .collect();
    assert_eq!(platforms, vec!["github", "instagram"]);
    assert_eq!(content["site"]["tagline"], "Learn, build, share");
}

#[test]
fn test_site_fails_when_settings_missing() {
    let world = TestWorld::new()
        .with_resource(Resource::Site, fixtures::sample_site())
        .with_resource(Resource::Social, fixtures::sample_social());

    let result = world.run(&["site"]).unwrap();
    assert!(!result.success());
    assert!(
        result
            .stderr()
            .contains("Failed to load settings (status 404)")
    );
}
