//! Listing scenarios
//!
//! Exercise the events page flow end to end: category filter, date
//! bucketing and per-bucket paging over a realistic content set.

use chapter_engine::{EventListing, paginate, partition_by_date};
use chapter_types::{CategoryFilter, Event, EventCategory};
use chrono::{Duration, NaiveDate};
use std::num::NonZeroUsize;

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

/// 14 events: 9 upcoming (offsets 0..=8 days), 5 past, interleaved.
fn fourteen_events() -> Vec<Event> {
    let offsets: [i64; 14] = [3, -10, 0, 8, -1, 5, 2, -40, 7, 1, -3, 6, -365, 4];
    let categories = ["web", "cloud", "android", "ml", "hackathon"];

    offsets
        .iter()
        .enumerate()
        .map(|(i, offset)| {
            let date = reference() + Duration::days(*offset);
            serde_json::from_value(serde_json::json!({
                "id": i as i64 + 1,
                "title": format!("Event {}", i + 1),
                "date": date.format("%Y-%m-%d").to_string(),
                "category": categories[i % categories.len()],
            }))
            .unwrap()
        })
        .collect()
}

fn ids(events: &[&Event]) -> Vec<String> {
    events.iter().map(|e| e.id.to_string()).collect()
}

#[test]
fn test_upcoming_first_page_shows_first_six_upcoming() {
    let events = fourteen_events();
    let listing = EventListing::default();

    let view = listing.view(&events, reference());

    assert_eq!(view.upcoming.total(), 9);
    assert_eq!(view.past.total(), 5);
    assert_eq!(view.upcoming.meta.total_pages, 9usize.div_ceil(6));
    assert_eq!(view.past.meta.total_pages, 1);

    // Input order is preserved, not date order
    assert_eq!(ids(&view.upcoming.items), vec!["1", "3", "4", "6", "7", "9"]);
    assert_eq!(view.upcoming.meta.start_index, 1);
    assert_eq!(view.upcoming.meta.end_index, 6);
    assert!(view.upcoming.meta.shows_controls());
    assert!(!view.past.meta.shows_controls());
}

#[test]
fn test_second_upcoming_page_and_clamping() {
    let events = fourteen_events();
    let mut listing = EventListing::default();

    listing.set_upcoming_page(2);
    let view = listing.view(&events, reference());
    assert_eq!(ids(&view.upcoming.items), vec!["10", "12", "14"]);
    assert_eq!(
        (view.upcoming.meta.start_index, view.upcoming.meta.end_index),
        (7, 9)
    );

    listing.set_upcoming_page(2 + 5);
    let clamped = listing.view(&events, reference());
    assert_eq!(clamped.upcoming.items, view.upcoming.items);
    assert!(clamped.upcoming.meta.clamped);
}

#[test]
fn test_category_change_resets_both_pages() {
    let events = fourteen_events();
    let mut listing = EventListing::default();
    listing.set_upcoming_page(2);
    listing.set_past_page(2);

    listing.set_category(CategoryFilter::Only(EventCategory::Web));
    assert_eq!(listing.upcoming_page(), 1);
    assert_eq!(listing.past_page(), 1);

    let view = listing.view(&events, reference());
    // web events are ids 1, 6, 11
    assert_eq!(view.filtered_count, 3);
    assert_eq!(ids(&view.upcoming.items), vec!["1", "6"]);
    assert_eq!(ids(&view.past.items), vec!["11"]);
    assert!(!view.upcoming.meta.clamped);
}

#[test]
fn test_unmatched_category_is_empty() {
    let events = fourteen_events();
    let mut listing = EventListing::default();
    listing.set_category("workshop".parse().unwrap());

    let view = listing.view(&events, reference());
    assert!(view.is_empty());
    assert!(view.upcoming.is_empty());
    assert_eq!(view.upcoming.meta.total_pages, 0);
}

#[test]
fn test_partition_is_total_and_stable_for_any_reference() {
    let events = fourteen_events();
    for shift in -400..=400i64 {
        let reference = reference() + Duration::days(shift);
        let p = partition_by_date(&events, reference);
        assert_eq!(p.classified(), events.len());

        // Every bucket is a subsequence of the input
        let positions = |bucket: &[&Event]| -> Vec<usize> {
            bucket
                .iter()
                .map(|e| events.iter().position(|x| x.id == e.id).unwrap())
                .collect()
        };
        let up = positions(p.upcoming.as_slice());
        let past = positions(p.past.as_slice());
        assert!(up.windows(2).all(|w| w[0] < w[1]));
        assert!(past.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_custom_page_size() {
    let events = fourteen_events();
    let listing = EventListing::new(NonZeroUsize::new(4).unwrap());
    let view = listing.view(&events, reference());
    assert_eq!(view.upcoming.meta.total_pages, 3);
    assert_eq!(view.upcoming.items.len(), 4);

    let all: Vec<&Event> = events.iter().collect();
    let page = paginate(&all, 4, NonZeroUsize::new(4).unwrap());
    assert_eq!(page.items.len(), 2);
}
