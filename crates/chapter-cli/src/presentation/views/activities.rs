use std::fmt;

use super::write_page_controls;
use crate::presentation::formatters::truncate;
use crate::presentation::view_models::{ActivityListViewModel, ViewMode};

const EXCERPT_WIDTH: usize = 80;

pub struct ActivityListView<'a> {
    data: &'a ActivityListViewModel,
    mode: ViewMode,
}

impl<'a> ActivityListView<'a> {
    pub fn new(data: &'a ActivityListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for activity in &self.data.entries {
            writeln!(f, "{}", activity.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.entries.is_empty() {
            writeln!(f, "No activities")?;
            return Ok(());
        }

        for activity in &self.data.entries {
            writeln!(f, "{} {}", activity.date, activity.title)?;
        }
        Ok(())
    }

    fn render_full(&self, f: &mut fmt::Formatter, verbose: bool) -> fmt::Result {
        match &self.data.tag {
            Some(tag) => writeln!(
                f,
                "Activities tagged '{}' ({} of {})",
                tag, self.data.page.total_items, self.data.total_activities
            )?,
            None => writeln!(f, "Activities ({})", self.data.total_activities)?,
        }
        writeln!(f)?;

        if self.data.entries.is_empty() {
            writeln!(f, "No activities found.")?;
            return Ok(());
        }

        for activity in &self.data.entries {
            writeln!(f, "  {}  {}", activity.date, activity.title)?;

            let mut meta = Vec::new();
            if let Some(author) = &activity.author {
                meta.push(format!("by {}", author));
            }
            if !activity.tags.is_empty() {
                meta.push(format!("#{}", activity.tags.join(" #")));
            }
            if !meta.is_empty() {
                writeln!(f, "      {}", meta.join(" · "))?;
            }

            if let Some(excerpt) = &activity.excerpt {
                if verbose {
                    writeln!(f, "      {}", excerpt)?;
                } else {
                    writeln!(f, "      {}", truncate(excerpt, EXCERPT_WIDTH))?;
                }
            }
        }

        write_page_controls(f, &self.data.page)
    }
}

impl<'a> fmt::Display for ActivityListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_full(f, false),
            ViewMode::Verbose => self.render_full(f, true),
        }
    }
}
