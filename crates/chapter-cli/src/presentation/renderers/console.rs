use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, StatusLevel, ViewMode,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
    styled: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self {
            format,
            mode,
            styled: std::io::stdout().is_terminal(),
        }
    }

    fn write_text<T>(&self, out: &mut impl Write, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        // Minimal output is for pipes: content only
        if self.mode == ViewMode::Minimal {
            write!(out, "{}", result.content.create_view(self.mode))?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            if self.styled {
                let label = match badge.level {
                    StatusLevel::Success => badge.label.green().bold().to_string(),
                    StatusLevel::Warning => badge.label.yellow().bold().to_string(),
                    StatusLevel::Error => badge.label.red().bold().to_string(),
                };
                writeln!(out, "{} {}", badge.icon(), label)?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.mode))?;

        if !result.suggestions.is_empty() {
            let heading = "💡 Tips:";
            if self.styled {
                writeln!(out, "\n{}", heading.yellow().bold())?;
            } else {
                writeln!(out, "\n{}", heading)?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.styled {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            }
            OutputFormat::Text => self.write_text(&mut out, &result)?,
        }

        out.flush()?;
        Ok(())
    }
}
