use crate::presentation::view_models::{
    CheckViewModel, CommandResultViewModel, Guidance, StatusBadge,
};

pub fn present_check(content: CheckViewModel) -> CommandResultViewModel<CheckViewModel> {
    let failed = content.failed_count();
    let rejected = content.rejected.len();
    let unknown = content.unknown_files.len();
    let total = content.resources.len();

    let badge = if failed > 0 {
        StatusBadge::error(format!("{} of {} resources failed to load", failed, total))
    } else if rejected > 0 {
        StatusBadge::warning(format!("{} record(s) with unreadable dates", rejected))
    } else {
        StatusBadge::success(format!("All {} resources are valid", total))
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);

    if rejected > 0 {
        result = result.with_suggestion(Guidance::new(
            "Use YYYY-MM-DD dates; records with unreadable dates are left out of listings",
        ));
    }

    if unknown > 0 {
        result = result.with_suggestion(Guidance::new(format!(
            "{} JSON file(s) are not read by any page",
            unknown
        )));
    }

    result
}
