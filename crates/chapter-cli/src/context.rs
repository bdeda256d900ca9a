use anyhow::{Result, anyhow};
use chapter_engine::today;
use chapter_runtime::{
    Config, ContentLoader, ContentSource, LoadState, SiteContext, Transport,
};
use chapter_types::Resource;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::debug;

use crate::args::Cli;
use crate::presentation::{ConsoleRenderer, OutputFormat, ViewMode};

/// Everything a handler needs: where content lives, the reference date and
/// how to print.
pub struct ExecutionContext {
    config: Config,
    source: ContentSource,
    transport: Arc<dyn Transport>,
    reference: NaiveDate,
    format: OutputFormat,
    view_mode: ViewMode,
}

impl ExecutionContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        let source = config.resolve_source(cli.base_url.as_deref(), cli.content_dir.as_deref());
        let transport = source.open(config.timeout())?;

        debug!(source = %source, "content source resolved");

        Ok(Self {
            reference: cli.today.unwrap_or_else(today),
            format: OutputFormat::from(cli.format),
            view_mode: cli.view_mode.resolve(),
            config,
            source,
            transport,
        })
    }

    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference
    }

    /// Explicit flag, then config, then the engine default
    pub fn page_size(&self, explicit: Option<NonZeroUsize>) -> NonZeroUsize {
        explicit.unwrap_or_else(|| self.config.page_size())
    }

    pub fn renderer(&self) -> ConsoleRenderer {
        ConsoleRenderer::new(self.format, self.view_mode)
    }

    /// Load one resource, turning a failed state into an error.
    pub async fn load<T>(&self, resource: Resource) -> Result<T>
    where
        T: DeserializeOwned + Clone + Send + Sync,
    {
        let loader = ContentLoader::<T>::new(self.transport.clone());
        match loader.load(resource).await {
            Some(LoadState::Ready { data }) => Ok(data),
            Some(LoadState::Failed { message }) => Err(anyhow!(message)),
            Some(LoadState::Pending) | None => {
                Err(anyhow!("Load of {} did not complete", resource))
            }
        }
    }

    pub async fn site_context(&self) -> Result<SiteContext> {
        Ok(SiteContext::load(self.transport()).await?)
    }
}
