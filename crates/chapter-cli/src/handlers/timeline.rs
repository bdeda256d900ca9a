use anyhow::Result;
use chapter_engine::Timeline;
use chapter_types::{Event, Resource};
use tracing::warn;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::Renderer;

pub async fn handle(ctx: &ExecutionContext) -> Result<()> {
    let events: Vec<Event> = ctx.load(Resource::Events).await?;
    let reference = ctx.reference_date();

    let timeline = Timeline::build(&events, reference);

    for rejected in &timeline.rejected {
        warn!(id = %rejected.id, value = %rejected.value, "skipping event with unreadable date");
    }

    let result = presenters::present_timeline(&timeline, reference);
    ctx.renderer().render(result)
}
