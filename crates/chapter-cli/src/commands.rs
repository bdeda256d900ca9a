use anyhow::Result;

use super::args::{Cli, Commands};
use super::context::ExecutionContext;
use super::handlers;
use super::logging;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(dispatch(cli))
}

async fn dispatch(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::from_cli(&cli)?;

    match cli.command {
        Commands::Events {
            category,
            upcoming_page,
            past_page,
            page_size,
        } => handlers::events::handle(&ctx, category, upcoming_page, past_page, page_size).await,

        Commands::Activities {
            tag,
            page,
            page_size,
        } => handlers::activities::handle(&ctx, tag, page, page_size).await,

        Commands::Team => handlers::team::handle(&ctx).await,

        Commands::Faq => handlers::faq::handle(&ctx).await,

        Commands::Timeline => handlers::timeline::handle(&ctx).await,

        Commands::Site => handlers::site::handle(&ctx).await,

        Commands::Check => handlers::check::handle(&ctx).await,
    }
}
