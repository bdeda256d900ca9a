use chapter_types::TeamMember;
use serde::Serialize;

const LEAD_ROLE_KEYWORD: &str = "organizer";

/// Team members with the organizer pulled out for the featured slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roster<'a> {
    pub lead: Option<&'a TeamMember>,
    pub members: Vec<&'a TeamMember>,
}

impl<'a> Roster<'a> {
    /// The first member whose role mentions "organizer" becomes the lead.
    /// Any further organizers stay in `members` in input order.
    pub fn build(team: &'a [TeamMember]) -> Self {
        let lead_idx = team.iter().position(is_lead);

        let members = team
            .iter()
            .enumerate()
            .filter(|(idx, _)| Some(*idx) != lead_idx)
            .map(|(_, member)| member)
            .collect();

        Self {
            lead: lead_idx.map(|idx| &team[idx]),
            members,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len() + usize::from(self.lead.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn is_lead(member: &TeamMember) -> bool {
    member.role.to_lowercase().contains(LEAD_ROLE_KEYWORD)
}

/// Up to two initials from the leading words of a name ("Ada Lovelace" -> "AL")
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
