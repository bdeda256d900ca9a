use std::fmt;

use super::events::write_event_details;
use crate::presentation::formatters::{format_date_short, format_relative_date};
use crate::presentation::view_models::{EventEntryViewModel, TimelineViewModel, ViewMode};

pub struct TimelineView<'a> {
    data: &'a TimelineViewModel,
    mode: ViewMode,
}

impl<'a> TimelineView<'a> {
    pub fn new(data: &'a TimelineViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn write_line(&self, f: &mut fmt::Formatter, event: &EventEntryViewModel) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", event.id),
            ViewMode::Compact => writeln!(f, "{} {}", event.date, event.title),
            ViewMode::Standard | ViewMode::Verbose => {
                writeln!(
                    f,
                    "  {} {:<13} {:<12} {}",
                    if event.days_from_reference >= 0 { "●" } else { "○" },
                    format_date_short(event.date),
                    format_relative_date(event.date, self.data.reference_date),
                    event.title
                )?;
                if self.mode == ViewMode::Verbose {
                    write_event_details(f, event)?;
                }
                Ok(())
            }
        }
    }
}

impl<'a> fmt::Display for TimelineView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let headed = matches!(self.mode, ViewMode::Standard | ViewMode::Verbose);

        if self.data.upcoming.is_empty() && self.data.recent_past.is_empty() {
            if self.mode != ViewMode::Minimal {
                writeln!(f, "No events yet.")?;
            }
            return Ok(());
        }

        if headed {
            writeln!(f, "Coming up")?;
            if self.data.upcoming.is_empty() {
                writeln!(f, "  (nothing scheduled)")?;
            }
        }
        for event in &self.data.upcoming {
            self.write_line(f, event)?;
        }

        if headed {
            writeln!(f)?;
            writeln!(f, "Recently")?;
        }
        for event in &self.data.recent_past {
            self.write_line(f, event)?;
        }

        if headed && self.data.hidden_past > 0 {
            writeln!(f, "  … and {} earlier", self.data.hidden_past)?;
        }

        Ok(())
    }
}
