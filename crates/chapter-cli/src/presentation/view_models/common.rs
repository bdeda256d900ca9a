use serde::Serialize;

use crate::args;

/// Output density, from ids only up to every field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Minimal,
    Compact,
    #[default]
    Standard,
    Verbose,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<args::OutputFormat> for OutputFormat {
    fn from(format: args::OutputFormat) -> Self {
        match format {
            args::OutputFormat::Plain => OutputFormat::Text,
            args::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Headline shown above a command's content, e.g. skipped records.
#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub label: String,
}

impl StatusBadge {
    fn at(level: StatusLevel, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
        }
    }

    pub fn success(label: impl Into<String>) -> Self {
        Self::at(StatusLevel::Success, label)
    }

    pub fn warning(label: impl Into<String>) -> Self {
        Self::at(StatusLevel::Warning, label)
    }

    pub fn error(label: impl Into<String>) -> Self {
        Self::at(StatusLevel::Error, label)
    }

    pub fn icon(&self) -> &'static str {
        self.level.icon()
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    pub fn icon(self) -> &'static str {
        match self {
            StatusLevel::Success => "✅",
            StatusLevel::Warning => "⚠️",
            StatusLevel::Error => "❌",
        }
    }
}

/// A follow-up hint, optionally with the command that acts on it
#[derive(Debug, Clone, Serialize)]
pub struct Guidance {
    pub description: String,
    pub command: Option<String>,
}

impl Guidance {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
        }
    }

    pub fn with_command(self, command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            ..self
        }
    }
}

/// One page of a paged list. `window` holds the page buttons to draw;
/// `null` marks an ellipsis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageViewModel {
    pub page: usize,
    pub requested_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub clamped: bool,
    pub window: Vec<Option<usize>>,
}

impl PageViewModel {
    pub fn shows_controls(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_serializes_level_and_label() {
        let badge = StatusBadge::warning("1 record skipped");
        let json = serde_json::to_value(&badge).unwrap();

        assert_eq!(json["level"], "warning");
        assert_eq!(json["label"], "1 record skipped");
        assert_eq!(badge.icon(), StatusLevel::Warning.icon());
    }

    #[test]
    fn test_guidance_command_is_optional() {
        let hint = Guidance::new("Show every field");
        assert!(hint.command.is_none());

        let hint = hint.with_command("chapter events --verbose");
        assert_eq!(hint.command.as_deref(), Some("chapter events --verbose"));
        assert_eq!(hint.description, "Show every field");
    }
}
