use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::Renderer;

pub async fn handle(ctx: &ExecutionContext) -> Result<()> {
    let context = ctx.site_context().await?;

    let result = presenters::present_site(&context);
    ctx.renderer().render(result)
}
