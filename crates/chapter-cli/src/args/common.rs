use clap::{Args, ValueEnum};
use std::fmt;

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(long, global = true, help = "Minimal output (IDs only, for scripting)")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Compact output (one line per item)")]
    pub compact: bool,

    #[arg(long, global = true, help = "Verbose output (all fields)")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::ViewMode;

    #[test]
    fn test_view_mode_resolution() {
        assert_eq!(ViewModeArgs::default().resolve(), ViewMode::Standard);

        let quiet = ViewModeArgs {
            quiet: true,
            verbose: true,
            ..Default::default()
        };
        assert_eq!(quiet.resolve(), ViewMode::Minimal);

        let verbose = ViewModeArgs {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(verbose.resolve(), ViewMode::Verbose);
    }
}
