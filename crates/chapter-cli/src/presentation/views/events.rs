use std::fmt;

use super::write_page_controls;
use crate::presentation::formatters::{format_date_long, format_date_short, format_relative_date, rule};
use crate::presentation::view_models::{
    EventEntryViewModel, EventListViewModel, EventPageViewModel, ViewMode,
};

// --------------------------------------------------------
// Event List View
// --------------------------------------------------------

pub struct EventListView<'a> {
    data: &'a EventListViewModel,
    mode: ViewMode,
}

impl<'a> EventListView<'a> {
    pub fn new(data: &'a EventListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for event in self.entries() {
            writeln!(f, "{}", event.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.filtered_count == 0 {
            writeln!(f, "No events")?;
            return Ok(());
        }

        for event in &self.data.upcoming.entries {
            writeln!(f, "upcoming {} {:<10} {}", event.date, event.category, event.title)?;
        }
        for event in &self.data.past.entries {
            writeln!(f, "past     {} {:<10} {}", event.date, event.category, event.title)?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_header(f)?;

        if self.data.filtered_count == 0 {
            writeln!(f)?;
            writeln!(f, "No events found.")?;
            return Ok(());
        }

        self.render_section(f, "Upcoming", &self.data.upcoming, false)?;
        self.render_section(f, "Past", &self.data.past, false)?;
        self.render_rejected(f)
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_header(f)?;

        if self.data.filtered_count == 0 {
            writeln!(f)?;
            writeln!(f, "No events found.")?;
            return Ok(());
        }

        self.render_section(f, "Upcoming", &self.data.upcoming, true)?;
        self.render_section(f, "Past", &self.data.past, true)?;
        self.render_rejected(f)
    }

    fn entries(&self) -> impl Iterator<Item = &EventEntryViewModel> {
        self.data
            .upcoming
            .entries
            .iter()
            .chain(self.data.past.entries.iter())
    }

    fn render_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} ({} of {}) as of {}",
            self.data.category_label,
            self.data.filtered_count,
            self.data.total_events,
            format_date_long(self.data.reference_date)
        )?;
        writeln!(f, "{}", rule())
    }

    fn render_section(
        &self,
        f: &mut fmt::Formatter,
        title: &str,
        section: &EventPageViewModel,
        detailed: bool,
    ) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{} ({})", title, section.page.total_items)?;

        if section.entries.is_empty() {
            writeln!(f, "  (none)")?;
            return Ok(());
        }

        for event in &section.entries {
            writeln!(
                f,
                "  {:<13} {:<12} {} [{}]",
                format_date_short(event.date),
                format_relative_date(event.date, self.data.reference_date),
                event.title,
                event.category_label
            )?;

            if detailed {
                write_event_details(f, event)?;
            }
        }

        write_page_controls(f, &section.page)
    }

    fn render_rejected(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.rejected.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Skipped (unreadable date):")?;
        for record in &self.data.rejected {
            writeln!(f, "  #{} '{}'", record.id, record.value)?;
        }
        Ok(())
    }
}

pub(crate) fn write_event_details(f: &mut fmt::Formatter, event: &EventEntryViewModel) -> fmt::Result {
    writeln!(f, "      id: {}", event.id)?;
    if let Some(time) = &event.time {
        writeln!(f, "      time: {}", time)?;
    }
    if let Some(venue) = &event.venue {
        writeln!(f, "      venue: {}", venue)?;
    }
    if let Some(summary) = &event.summary {
        writeln!(f, "      {}", summary)?;
    }
    if let Some(url) = &event.register_url {
        writeln!(f, "      register: {}", url)?;
    }
    if let Some(url) = &event.resources_url {
        writeln!(f, "      resources: {}", url)?;
    }
    Ok(())
}

impl<'a> fmt::Display for EventListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}
