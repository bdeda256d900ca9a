pub mod activities;
pub mod check;
pub mod events;
pub mod faq;
pub mod site;
pub mod team;
pub mod timeline;

pub use activities::present_activity_listing;
pub use check::present_check;
pub use events::present_event_listing;
pub use faq::present_faq;
pub use site::present_site;
pub use team::present_team;
pub use timeline::present_timeline;

use chapter_engine::{PageLink, PageMeta, page_window};
use chapter_types::InvalidDate;

use crate::presentation::view_models::{PageViewModel, RejectedRecordViewModel};

pub(crate) fn page_view_model(meta: &PageMeta) -> PageViewModel {
    let window = page_window(meta.page, meta.total_pages)
        .into_iter()
        .map(|link| match link {
            PageLink::Page(n) => Some(n),
            PageLink::Ellipsis => None,
        })
        .collect();

    PageViewModel {
        page: meta.page,
        requested_page: meta.requested_page,
        page_size: meta.page_size,
        total_items: meta.total_items,
        total_pages: meta.total_pages,
        start_index: meta.start_index,
        end_index: meta.end_index,
        clamped: meta.clamped,
        window,
    }
}

pub(crate) fn rejected_records(
    resource: Option<&str>,
    rejected: &[InvalidDate],
) -> Vec<RejectedRecordViewModel> {
    rejected
        .iter()
        .map(|r| RejectedRecordViewModel {
            resource: resource.map(str::to_string),
            id: r.id.clone(),
            value: r.value.clone(),
        })
        .collect()
}

/// Quote a value for a suggested command line when the shell would split it.
pub(crate) fn shell_arg(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':'));
    if plain {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', "'\\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_arg() {
        assert_eq!(shell_arg("recap"), "recap");
        assert_eq!(shell_arg("study jam"), "'study jam'");
        assert_eq!(shell_arg("it's"), "'it'\\''s'");
    }
}
