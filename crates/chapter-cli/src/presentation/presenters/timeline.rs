use chapter_engine::Timeline;
use chrono::NaiveDate;

use super::events::event_entry;
use super::rejected_records;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, TimelineViewModel,
};

pub fn present_timeline(
    timeline: &Timeline<'_>,
    reference: NaiveDate,
) -> CommandResultViewModel<TimelineViewModel> {
    let content = TimelineViewModel {
        reference_date: reference,
        upcoming: timeline
            .upcoming
            .iter()
            .filter_map(|e| event_entry(e, reference))
            .collect(),
        recent_past: timeline
            .recent_past
            .iter()
            .filter_map(|e| event_entry(e, reference))
            .collect(),
        hidden_past: timeline.hidden_past,
        rejected: rejected_records(None, &timeline.rejected),
    };

    let mut result = CommandResultViewModel::new(content);

    if !timeline.rejected.is_empty() {
        result = result.with_badge(StatusBadge::warning(format!(
            "{} event(s) skipped: unreadable date",
            timeline.rejected.len()
        )));
    }

    if timeline.hidden_past > 0 {
        result = result.with_suggestion(
            Guidance::new(format!("{} older event(s) not shown", timeline.hidden_past))
                .with_command("chapter events --past-page 1"),
        );
    }

    result
}
