use anyhow::Result;
use chapter_types::{FaqEntry, Resource};

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::Renderer;

pub async fn handle(ctx: &ExecutionContext) -> Result<()> {
    let entries: Vec<FaqEntry> = ctx.load(Resource::Faq).await?;

    let result = presenters::present_faq(&entries);
    ctx.renderer().render(result)
}
