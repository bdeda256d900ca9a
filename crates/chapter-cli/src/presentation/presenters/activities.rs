use chapter_engine::ActivityListingView;

use super::{page_view_model, shell_arg};
use crate::presentation::view_models::{
    ActivityEntryViewModel, ActivityListViewModel, CommandResultViewModel, Guidance,
};

pub fn present_activity_listing(
    view: &ActivityListingView<'_>,
) -> CommandResultViewModel<ActivityListViewModel> {
    let entries = view
        .page
        .items
        .iter()
        .map(|a| ActivityEntryViewModel {
            id: a.id.clone(),
            title: a.title.clone(),
            date: a.date.clone(),
            tags: a.tags.clone(),
            author: a.author.clone(),
            excerpt: a.excerpt.clone(),
        })
        .collect();

    let page = page_view_model(&view.page.meta);
    let mut suggestions = Vec::new();

    if page.clamped {
        suggestions.push(Guidance::new(format!(
            "Page {} is out of range; showing page {}",
            page.requested_page, page.page
        )));
    }

    if let Some(tag) = &view.tag
        && page.total_items == 0
    {
        suggestions.push(
            Guidance::new(format!("No activities tagged '{}'", tag))
                .with_command("chapter activities"),
        );
    } else if page.has_next() {
        let command = match &view.tag {
            Some(tag) => format!(
                "chapter activities --tag {} --page {}",
                shell_arg(tag),
                page.page + 1
            ),
            None => format!("chapter activities --page {}", page.page + 1),
        };
        suggestions.push(Guidance::new("More activities").with_command(command));
    }

    let content = ActivityListViewModel {
        tag: view.tag.clone(),
        total_activities: view.total_activities,
        entries,
        page,
    };

    suggestions
        .into_iter()
        .fold(CommandResultViewModel::new(content), |result, tip| {
            result.with_suggestion(tip)
        })
}
