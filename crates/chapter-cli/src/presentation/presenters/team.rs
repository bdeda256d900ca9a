use chapter_engine::{Roster, initials};
use chapter_types::TeamMember;

use crate::presentation::view_models::{
    CommandResultViewModel, MemberViewModel, SocialLinkViewModel, TeamViewModel,
};

pub fn present_team(roster: &Roster<'_>) -> CommandResultViewModel<TeamViewModel> {
    CommandResultViewModel::new(TeamViewModel {
        total_members: roster.len(),
        lead: roster.lead.map(member),
        members: roster.members.iter().map(|m| member(m)).collect(),
    })
}

fn member(m: &TeamMember) -> MemberViewModel {
    MemberViewModel {
        id: m.id.clone(),
        name: m.name.clone(),
        initials: initials(&m.name),
        role: m.role.clone(),
        photo: m.photo.clone(),
        bio: m.bio.clone(),
        socials: m
            .socials
            .iter()
            .filter_map(|(platform, url)| {
                let url = url.as_deref().filter(|u| !u.trim().is_empty())?;
                Some(SocialLinkViewModel {
                    platform: platform.clone(),
                    url: url.to_string(),
                })
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_is_separated_and_null_socials_dropped() {
        let team: Vec<TeamMember> = serde_json::from_value(serde_json::json!([
            {"id": 1, "name": "Sam Rivera", "role": "Core Team", "socials": {"github": "https://github.com/sam", "x": null}},
            {"id": 2, "name": "Ada King", "role": "Lead Organizer"}
        ]))
        .unwrap();

        let roster = Roster::build(&team);
        let result = present_team(&roster);

        let lead = result.content.lead.as_ref().unwrap();
        assert_eq!(lead.name, "Ada King");
        assert_eq!(lead.initials, "AK");
        assert_eq!(result.content.members.len(), 1);
        assert_eq!(result.content.members[0].socials.len(), 1);
        assert_eq!(result.content.total_members, 2);
    }
}
