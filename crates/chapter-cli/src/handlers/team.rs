use anyhow::Result;
use chapter_engine::Roster;
use chapter_types::{Resource, TeamMember};

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::Renderer;

pub async fn handle(ctx: &ExecutionContext) -> Result<()> {
    let team: Vec<TeamMember> = ctx.load(Resource::Team).await?;

    let roster = Roster::build(&team);
    let result = presenters::present_team(&roster);
    ctx.renderer().render(result)
}
