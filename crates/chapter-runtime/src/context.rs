use chapter_types::{Resource, Settings, SiteInfo, SocialLinks};
use serde::Serialize;
use tracing::info;

use crate::error::LoadError;
use crate::loader::fetch_json;
use crate::transport::Transport;

/// Site-wide data loaded once at start-up and handed to whoever needs it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteContext {
    pub site: SiteInfo,
    pub settings: Settings,
    pub social: SocialLinks,
}

impl SiteContext {
    /// Fetch `site`, `settings` and `social` concurrently; any failure fails the whole load.
    pub async fn load(transport: &dyn Transport) -> Result<Self, LoadError> {
        let (site, settings, social) = tokio::try_join!(
            fetch_json::<SiteInfo>(transport, Resource::Site),
            fetch_json::<Settings>(transport, Resource::Settings),
            fetch_json::<SocialLinks>(transport, Resource::Social),
        )?;

        info!(theme = %settings.theme, "site context loaded");

        Ok(Self {
            site,
            settings,
            social,
        })
    }

    pub fn theme(&self) -> &str {
        &self.settings.theme
    }
}
