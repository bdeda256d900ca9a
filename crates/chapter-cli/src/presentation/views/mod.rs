pub mod activities;
pub mod check;
pub mod events;
pub mod faq;
pub mod site;
pub mod team;
pub mod timeline;

use std::fmt;

use crate::presentation::view_models::PageViewModel;

/// "Showing 7-12 of 14 · « 1 [2] 3 »", or nothing when one page holds everything.
pub(crate) fn write_page_controls(f: &mut fmt::Formatter, page: &PageViewModel) -> fmt::Result {
    if !page.shows_controls() {
        return Ok(());
    }

    write!(
        f,
        "  Showing {}-{} of {} · ",
        page.start_index, page.end_index, page.total_items
    )?;

    if page.has_previous() {
        write!(f, "« ")?;
    }

    let buttons: Vec<String> = page
        .window
        .iter()
        .map(|button| match button {
            Some(n) if *n == page.page => format!("[{}]", n),
            Some(n) => n.to_string(),
            None => "…".to_string(),
        })
        .collect();
    write!(f, "{}", buttons.join(" "))?;

    if page.has_next() {
        write!(f, " »")?;
    }

    writeln!(f)
}
