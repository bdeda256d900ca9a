use std::fmt;

use crate::presentation::view_models::{FaqViewModel, ViewMode};

pub struct FaqView<'a> {
    data: &'a FaqViewModel,
    mode: ViewMode,
}

impl<'a> FaqView<'a> {
    pub fn new(data: &'a FaqViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for FaqView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.entries.is_empty() && self.mode != ViewMode::Minimal {
            writeln!(f, "No questions yet.")?;
            return Ok(());
        }

        for (i, entry) in self.data.entries.iter().enumerate() {
            match self.mode {
                ViewMode::Minimal => writeln!(f, "{}", entry.id)?,
                ViewMode::Compact => writeln!(f, "{}", entry.question)?,
                ViewMode::Standard | ViewMode::Verbose => {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "Q: {}", entry.question)?;
                    writeln!(f, "A: {}", entry.answer)?;
                }
            }
        }

        Ok(())
    }
}
