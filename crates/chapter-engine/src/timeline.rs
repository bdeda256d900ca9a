use chapter_types::{Event, InvalidDate};
use chrono::NaiveDate;
use serde::Serialize;

use crate::partition::partition_by_date;

/// How many past events the home timeline keeps
pub const TIMELINE_PAST_LIMIT: usize = 5;

/// Home page timeline: every upcoming event, then the first few past ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline<'a> {
    pub upcoming: Vec<&'a Event>,
    pub recent_past: Vec<&'a Event>,
    /// Past events dropped by the limit
    pub hidden_past: usize,
    pub rejected: Vec<InvalidDate>,
}

impl<'a> Timeline<'a> {
    pub fn build(events: &'a [Event], reference: NaiveDate) -> Self {
        let mut partition = partition_by_date(events, reference);
        let hidden_past = partition.past.len().saturating_sub(TIMELINE_PAST_LIMIT);
        partition.past.truncate(TIMELINE_PAST_LIMIT);

        Self {
            upcoming: partition.upcoming,
            recent_past: partition.past,
            hidden_past,
            rejected: partition.rejected,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.recent_past.is_empty()
    }
}
