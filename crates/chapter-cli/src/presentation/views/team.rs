use std::fmt;

use crate::presentation::view_models::{MemberViewModel, TeamViewModel, ViewMode};

pub struct TeamView<'a> {
    data: &'a TeamViewModel,
    mode: ViewMode,
}

impl<'a> TeamView<'a> {
    pub fn new(data: &'a TeamViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn everyone(&self) -> impl Iterator<Item = &MemberViewModel> {
        self.data.lead.iter().chain(self.data.members.iter())
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for member in self.everyone() {
            writeln!(f, "{}", member.name)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for member in self.everyone() {
            writeln!(f, "{:<4} {} ({})", member.initials, member.name, member.role)?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.total_members == 0 {
            writeln!(f, "No team members listed.")?;
            return Ok(());
        }

        if let Some(lead) = &self.data.lead {
            writeln!(f, "Organizer")?;
            writeln!(f, "  [{}] {} · {}", lead.initials, lead.name, lead.role)?;
            if let Some(bio) = &lead.bio {
                writeln!(f, "      {}", bio)?;
            }
            writeln!(f)?;
        }

        if !self.data.members.is_empty() {
            writeln!(f, "Team ({})", self.data.members.len())?;
            for member in &self.data.members {
                writeln!(f, "  [{}] {} · {}", member.initials, member.name, member.role)?;
            }
        }

        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.total_members == 0 {
            writeln!(f, "No team members listed.")?;
            return Ok(());
        }

        for (i, member) in self.everyone().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{} ({})", member.name, member.role)?;
            writeln!(f, "  id: {}", member.id)?;
            if let Some(photo) = &member.photo {
                writeln!(f, "  photo: {}", photo)?;
            }
            if let Some(bio) = &member.bio {
                writeln!(f, "  bio: {}", bio)?;
            }
            for link in &member.socials {
                writeln!(f, "  {}: {}", link.platform, link.url)?;
            }
        }

        Ok(())
    }
}

impl<'a> fmt::Display for TeamView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}
