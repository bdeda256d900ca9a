use anyhow::Result;
use chapter_engine::ActivityListing;
use chapter_types::{Activity, Resource};
use std::num::NonZeroUsize;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::Renderer;

pub async fn handle(
    ctx: &ExecutionContext,
    tag: Option<String>,
    page: usize,
    page_size: Option<NonZeroUsize>,
) -> Result<()> {
    let activities: Vec<Activity> = ctx.load(Resource::Activities).await?;

    let mut listing = ActivityListing::new(ctx.page_size(page_size));
    listing.set_tag(tag);
    listing.set_page(page);

    let view = listing.view(&activities);
    let result = presenters::present_activity_listing(&view);
    ctx.renderer().render(result)
}
