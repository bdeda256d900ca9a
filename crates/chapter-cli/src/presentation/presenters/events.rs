use chapter_engine::{EventListingView, PagedBucket};
use chapter_types::{CategoryFilter, Dated, Event};
use chrono::NaiveDate;

use super::{page_view_model, rejected_records, shell_arg};
use crate::presentation::view_models::{
    CommandResultViewModel, EventEntryViewModel, EventListViewModel, EventPageViewModel,
    Guidance, PageViewModel, StatusBadge,
};

pub fn present_event_listing(
    view: &EventListingView<'_>,
) -> CommandResultViewModel<EventListViewModel> {
    let reference = view.reference;

    let content = EventListViewModel {
        category: view.category.to_string(),
        category_label: view.category.label().to_string(),
        reference_date: reference,
        total_events: view.total_events,
        filtered_count: view.filtered_count,
        upcoming: event_page(&view.upcoming, reference),
        past: event_page(&view.past, reference),
        rejected: rejected_records(None, &view.rejected),
    };

    let mut result = CommandResultViewModel::new(content);

    if !view.rejected.is_empty() {
        result = result
            .with_badge(StatusBadge::warning(format!(
                "{} event(s) skipped: unreadable date",
                view.rejected.len()
            )))
            .with_suggestion(
                Guidance::new("List every record with an unreadable date")
                    .with_command("chapter check"),
            );
    }

    if view.filtered_count == 0 && view.category != CategoryFilter::All {
        result = result.with_suggestion(
            Guidance::new(format!("No {} events found", view.category.label()))
                .with_command("chapter events --category all"),
        );
    }

    let upcoming_page = &result.content.upcoming.page;
    let past_page = &result.content.past.page;
    let mut tips = Vec::new();

    if let Some(tip) = clamp_tip("Upcoming", upcoming_page) {
        tips.push(tip);
    }
    if let Some(tip) = clamp_tip("Past", past_page) {
        tips.push(tip);
    }
    if upcoming_page.has_next() {
        tips.push(
            Guidance::new("More upcoming events").with_command(next_page_command(
                &view.category,
                "--upcoming-page",
                upcoming_page.page + 1,
            )),
        );
    }

    if past_page.has_next() {
        tips.push(
            Guidance::new("More past events").with_command(next_page_command(
                &view.category,
                "--past-page",
                past_page.page + 1,
            )),
        );
    }

    for tip in tips {
        result = result.with_suggestion(tip);
    }

    result
}

pub(crate) fn event_entry(event: &Event, reference: NaiveDate) -> Option<EventEntryViewModel> {
    let date = event.calendar_date().ok()?;

    Some(EventEntryViewModel {
        id: event.id.clone(),
        title: event.title.clone(),
        date,
        days_from_reference: (date - reference).num_days(),
        category: event.category.as_str().to_string(),
        category_label: event.category.label().to_string(),
        category_color: event.category.color().to_string(),
        time: event.time.clone(),
        venue: event.venue.clone(),
        summary: event.summary.clone(),
        details: event.details.clone(),
        register_url: event.register_url.clone(),
        resources_url: event.resources_url.clone(),
    })
}

fn event_page(bucket: &PagedBucket<'_, Event>, reference: NaiveDate) -> EventPageViewModel {
    EventPageViewModel {
        entries: bucket
            .items
            .iter()
            .filter_map(|event| event_entry(event, reference))
            .collect(),
        page: page_view_model(&bucket.meta),
    }
}

fn clamp_tip(bucket: &str, page: &PageViewModel) -> Option<Guidance> {
    page.clamped.then(|| {
        Guidance::new(format!(
            "{} page {} is out of range; showing page {} of {}",
            bucket,
            page.requested_page,
            page.page,
            page.total_pages.max(1)
        ))
    })
}

fn next_page_command(category: &CategoryFilter, flag: &str, page: usize) -> String {
    match category {
        CategoryFilter::All => format!("chapter events {} {}", flag, page),
        CategoryFilter::Only(c) => {
            format!(
                "chapter events --category {} {} {}",
                shell_arg(c.as_str()),
                flag,
                page
            )
        }
    }
}
