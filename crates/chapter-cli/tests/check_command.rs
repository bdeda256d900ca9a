use chapter_testing::assertions::assert_success;
use chapter_testing::{TestWorld, fixtures};
use chapter_types::Resource;
use predicates::prelude::*;
use serde_json::{Value, json};

fn status_of<'a>(json: &'a Value, resource: &str) -> &'a Value {
    json["content"]["resources"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["resource"] == resource)
        .map(|r| &r["status"])
        .unwrap()
}

#[test]
fn test_complete_content_passes() {
    let world = TestWorld::new()
        .with_sample_content()
        .with_today(fixtures::REFERENCE_DATE);

    let result = world.run(&["check", "--format", "json"]).unwrap();
    assert_success(&result).unwrap();

    let json = result.json().unwrap();
    let resources = json["content"]["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 7);
    assert!(resources.iter().all(|r| r["status"] == "ok"));
    assert_eq!(resources[0]["records"], 14);
    assert_eq!(json["badge"]["level"], "success");
}

#[test]
fn test_missing_resource_fails_after_report() {
    let world = TestWorld::new()
        .with_resource(Resource::Events, fixtures::sample_events())
        .with_resource(Resource::Faq, fixtures::sample_faq());

    let result = world.run(&["check", "--format", "json"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Error: Content check failed"));

    let json = result.json().unwrap();
    assert_eq!(status_of(&json, "events"), "ok");
    assert_eq!(status_of(&json, "faq"), "ok");
    assert_eq!(status_of(&json, "team"), "missing");
    assert_eq!(json["badge"]["label"], "5 of 7 resources failed to load");
}

#[test]
fn test_invalid_json_is_reported() {
    let world = TestWorld::new()
        .with_sample_content()
        .with_raw_file("faq.json", "{not json");

    let result = world.run(&["check", "--format", "json"]).unwrap();
    assert!(!result.success());

    let json = result.json().unwrap();
    assert_eq!(status_of(&json, "faq"), "invalid");
}

#[test]
fn test_unreadable_dates_warn_without_failing() {
    let world = TestWorld::new()
        .with_sample_content()
        .with_resource(
            Resource::Activities,
            json!([{"id": "a1", "title": "Recap", "date": "last spring", "tags": []}]),
        )
        .with_today(fixtures::REFERENCE_DATE);

    let result = world.run(&["check", "--format", "json"]).unwrap();
    assert_success(&result).unwrap();

    let json = result.json().unwrap();
    assert_eq!(json["badge"]["level"], "warning");
    assert_eq!(json["content"]["rejected"][0]["resource"], "activities");
    assert_eq!(json["content"]["rejected"][0]["id"], "a1");
}

#[test]
fn test_unknown_files_are_listed() {
    let world = TestWorld::new()
        .with_sample_content()
        .with_raw_file("sponsors.json", "[]");

    let result = world.run(&["check", "--format", "json"]).unwrap();
    assert_success(&result).unwrap();

    let json = result.json().unwrap();
    assert_eq!(json["content"]["unknown_files"], json!(["sponsors.json"]));
}

#[test]
#[allow(deprecated)]
fn test_text_report_on_empty_directory() {
    let world = TestWorld::new();

    let mut cmd = assert_cmd::Command::cargo_bin("chapter").unwrap();
    world.configure_command(&mut cmd).arg("check");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("7 of 7 resources failed to load"))
        .stdout(predicate::str::contains("events       missing"))
        .stderr(predicate::str::contains("Error: Content check failed"));
}
