//! Listing state for the events and activities pages.
//!
//! A listing owns the transient page numbers and the filter in front of them.
//! Changing the filter always sends every page back to 1; the paginator itself
//! stays stateless.

use chapter_types::{Activity, CategoryFilter, Event, InvalidDate};
use chrono::NaiveDate;
use serde::Serialize;
use std::num::NonZeroUsize;

use crate::paginate::{PageMeta, default_page_size, paginate};
use crate::partition::partition_by_date;

/// One paged bucket of borrowed records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedBucket<'a, T> {
    pub items: Vec<&'a T>,
    pub meta: PageMeta,
}

impl<'a, T> PagedBucket<'a, T> {
    fn from_refs(all: &[&'a T], page: usize, page_size: NonZeroUsize) -> Self {
        let page = paginate(all, page, page_size);
        Self {
            items: page.items.to_vec(),
            meta: page.meta,
        }
    }

    /// Size of the whole bucket, not just this page
    pub fn total(&self) -> usize {
        self.meta.total_items
    }

    pub fn is_empty(&self) -> bool {
        self.meta.total_items == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventListing {
    category: CategoryFilter,
    upcoming_page: usize,
    past_page: usize,
    page_size: NonZeroUsize,
}

impl Default for EventListing {
    fn default() -> Self {
        Self::new(default_page_size())
    }
}

impl EventListing {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            category: CategoryFilter::All,
            upcoming_page: 1,
            past_page: 1,
            page_size,
        }
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn upcoming_page(&self) -> usize {
        self.upcoming_page
    }

    pub fn past_page(&self) -> usize {
        self.past_page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Select a category; both buckets restart at page 1.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.upcoming_page = 1;
        self.past_page = 1;
    }

    pub fn set_upcoming_page(&mut self, page: usize) {
        self.upcoming_page = page;
    }

    pub fn set_past_page(&mut self, page: usize) {
        self.past_page = page;
    }

    /// Filter, partition around `reference`, then page each bucket.
    pub fn view<'a>(&self, events: &'a [Event], reference: NaiveDate) -> EventListingView<'a> {
        let filtered: Vec<&Event> = events
            .iter()
            .filter(|e| self.category.matches(&e.category))
            .collect();
        let filtered_count = filtered.len();

        let partition = partition_by_date(filtered, reference);

        EventListingView {
            category: self.category.clone(),
            reference,
            total_events: events.len(),
            filtered_count,
            upcoming: PagedBucket::from_refs(&partition.upcoming, self.upcoming_page, self.page_size),
            past: PagedBucket::from_refs(&partition.past, self.past_page, self.page_size),
            rejected: partition.rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventListingView<'a> {
    #[serde(serialize_with = "serialize_display")]
    pub category: CategoryFilter,
    pub reference: NaiveDate,
    /// Events in the source before the category filter
    pub total_events: usize,
    /// Events matching the category, including rejected ones
    pub filtered_count: usize,
    pub upcoming: PagedBucket<'a, Event>,
    pub past: PagedBucket<'a, Event>,
    pub rejected: Vec<InvalidDate>,
}

impl EventListingView<'_> {
    /// Nothing matched the category at all
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}

fn serialize_display<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: std::fmt::Display,
{
    serializer.collect_str(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityListing {
    tag: Option<String>,
    page: usize,
    page_size: NonZeroUsize,
}

impl Default for ActivityListing {
    fn default() -> Self {
        Self::new(default_page_size())
    }
}

impl ActivityListing {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            tag: None,
            page: 1,
            page_size,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Restrict to one tag (or clear it); the page restarts at 1.
    pub fn set_tag(&mut self, tag: Option<String>) {
        self.tag = tag.filter(|t| !t.trim().is_empty());
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn view<'a>(&self, activities: &'a [Activity]) -> ActivityListingView<'a> {
        let filtered: Vec<&Activity> = activities
            .iter()
            .filter(|a| self.tag.as_deref().is_none_or(|tag| a.has_tag(tag)))
            .collect();

        ActivityListingView {
            tag: self.tag.clone(),
            total_activities: activities.len(),
            page: PagedBucket::from_refs(&filtered, self.page, self.page_size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityListingView<'a> {
    pub tag: Option<String>,
    pub total_activities: usize,
    pub page: PagedBucket<'a, Activity>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chapter_types::EventCategory;

    fn event(id: i64, date: &str, category: &str) -> Event {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Event {}", id),
            "date": date,
            "category": category,
        }))
        .unwrap()
    }

    #[test]
    fn test_set_category_resets_both_pages() {
        let mut listing = EventListing::default();
        listing.set_upcoming_page(3);
        listing.set_past_page(2);

        listing.set_category(CategoryFilter::Only(EventCategory::Web));

        assert_eq!(listing.upcoming_page(), 1);
        assert_eq!(listing.past_page(), 1);
        assert_eq!(
            listing.category(),
            &CategoryFilter::Only(EventCategory::Web)
        );
    }

    #[test]
    fn test_view_filters_before_partitioning() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let events = vec![
            event(1, "2024-07-01", "web"),
            event(2, "2024-01-01", "cloud"),
            event(3, "2024-06-10", "web"),
            event(4, "2023-05-05", "web"),
        ];

        let mut listing = EventListing::default();
        listing.set_category("web".parse().unwrap());
        let view = listing.view(&events, reference);

        assert_eq!(view.total_events, 4);
        assert_eq!(view.filtered_count, 3);
        assert_eq!(view.upcoming.total(), 2);
        assert_eq!(view.past.total(), 1);
        assert!(!view.is_empty());
    }

    #[test]
    fn test_view_reports_rejected_dates() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let events = vec![event(1, "soon", "web"), event(2, "2024-07-01", "web")];
        let view = EventListing::default().view(&events, reference);
        assert_eq!(view.rejected.len(), 1);
        assert_eq!(view.upcoming.total(), 1);
        assert_eq!(view.filtered_count, 2);
    }

    #[test]
    fn test_activity_tag_resets_page() {
        let mut listing = ActivityListing::default();
        listing.set_page(4);
        listing.set_tag(Some("flutter".to_string()));
        assert_eq!(listing.page(), 1);
        assert_eq!(listing.tag(), Some("flutter"));

        listing.set_tag(Some("  ".to_string()));
        assert_eq!(listing.tag(), None);
    }
}
