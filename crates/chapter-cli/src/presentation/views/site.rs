use std::fmt;

use crate::presentation::view_models::{SiteViewModel, ViewMode};

pub struct SiteView<'a> {
    data: &'a SiteViewModel,
    mode: ViewMode,
}

impl<'a> SiteView<'a> {
    pub fn new(data: &'a SiteViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn name(&self) -> &str {
        self.data.name.as_deref().unwrap_or("(unnamed site)")
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let metrics = &self.data.metrics;

        writeln!(f, "{}", self.name())?;
        writeln!(f, "  theme: {}", self.data.theme)?;
        writeln!(f)?;
        writeln!(f, "Community")?;
        writeln!(f, "  {:>5}+ events completed", metrics.events_completed)?;
        writeln!(f, "  {:>5}+ members", metrics.total_members)?;
        writeln!(f, "  {:>5}+ bootcamps held", metrics.bootcamps_held)?;
        writeln!(f, "  {:>5}+ awards won", metrics.awards_won)?;

        if !self.data.social.is_empty() {
            writeln!(f)?;
            writeln!(f, "Links")?;
            for link in &self.data.social {
                writeln!(f, "  {:<10} {}", link.platform, link.url)?;
            }
        }

        Ok(())
    }
}

impl<'a> fmt::Display for SiteView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", self.name()),
            ViewMode::Compact => writeln!(
                f,
                "{} ({} theme, {} links)",
                self.name(),
                self.data.theme,
                self.data.social.len()
            ),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => {
                self.render_standard(f)?;
                writeln!(f)?;
                writeln!(f, "site.json")?;
                for (key, value) in &self.data.site {
                    writeln!(f, "  {}: {}", key, value)?;
                }
                Ok(())
            }
        }
    }
}
