use std::fmt;

use crate::presentation::view_models::{CheckStatus, CheckViewModel, ViewMode};

pub struct CheckView<'a> {
    data: &'a CheckViewModel,
    mode: ViewMode,
}

impl<'a> CheckView<'a> {
    pub fn new(data: &'a CheckViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for resource in &self.data.resources {
            if resource.status != CheckStatus::Ok {
                writeln!(f, "{}", resource.resource)?;
            }
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Source: {}", self.data.source)?;
        writeln!(f)?;
        writeln!(f, "{:<12} {:<8} RECORDS", "RESOURCE", "STATUS")?;

        for resource in &self.data.resources {
            let status = match resource.status {
                CheckStatus::Ok => "ok",
                CheckStatus::Missing => "missing",
                CheckStatus::Invalid => "invalid",
            };
            let records = resource
                .records
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(f, "{:<12} {:<8} {}", resource.resource, status, records)?;

            if self.mode == ViewMode::Verbose
                && let Some(message) = &resource.message
            {
                writeln!(f, "    {}", message)?;
            }
        }

        if !self.data.rejected.is_empty() {
            writeln!(f)?;
            writeln!(f, "Unreadable dates:")?;
            for record in &self.data.rejected {
                writeln!(
                    f,
                    "  {} #{} '{}'",
                    record.resource.as_deref().unwrap_or("?"),
                    record.id,
                    record.value
                )?;
            }
        }

        if !self.data.unknown_files.is_empty() {
            writeln!(f)?;
            writeln!(f, "Unrecognized files:")?;
            for file in &self.data.unknown_files {
                writeln!(f, "  {}", file)?;
            }
        }

        Ok(())
    }
}

impl<'a> fmt::Display for CheckView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact | ViewMode::Standard | ViewMode::Verbose => {
                self.render_standard(f)
            }
        }
    }
}
