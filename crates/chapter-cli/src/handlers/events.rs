use anyhow::Result;
use chapter_engine::EventListing;
use chapter_types::{CategoryFilter, Event, Resource};
use std::num::NonZeroUsize;
use tracing::warn;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::Renderer;

pub async fn handle(
    ctx: &ExecutionContext,
    category: CategoryFilter,
    upcoming_page: usize,
    past_page: usize,
    page_size: Option<NonZeroUsize>,
) -> Result<()> {
    let events: Vec<Event> = ctx.load(Resource::Events).await?;

    let mut listing = EventListing::new(ctx.page_size(page_size));
    listing.set_category(category);
    listing.set_upcoming_page(upcoming_page);
    listing.set_past_page(past_page);

    let view = listing.view(&events, ctx.reference_date());

    for rejected in &view.rejected {
        warn!(id = %rejected.id, value = %rejected.value, "skipping event with unreadable date");
    }

    let result = presenters::present_event_listing(&view);
    ctx.renderer().render(result)
}
