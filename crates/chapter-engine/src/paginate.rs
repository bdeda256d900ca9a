use serde::Serialize;
use std::num::NonZeroUsize;

/// Items per page used by the events and activities listings
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Page-number buttons are collapsed with ellipses above this many pages
const WINDOW_COLLAPSE_THRESHOLD: usize = 7;

pub fn default_page_size() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN)
}

/// Pagination metadata for one page of a sequence.
///
/// `start_index` and `end_index` are 1-indexed and inclusive, ready for
/// "Showing X to Y of N". Both are 0 for an empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub page: usize,
    pub requested_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub start_index: usize,
    pub end_index: usize,
    /// The requested page was outside `1..=total_pages` and was clamped
    pub clamped: bool,
}

impl PageMeta {
    pub fn compute(total_items: usize, requested_page: usize, page_size: NonZeroUsize) -> Self {
        let size = page_size.get();
        let total_pages = total_items.div_ceil(size);
        let page = requested_page.clamp(1, total_pages.max(1));

        let offset = (page - 1) * size;
        let end = (offset + size).min(total_items);
        let (start_index, end_index) = if total_items == 0 {
            (0, 0)
        } else {
            (offset + 1, end)
        };

        Self {
            page,
            requested_page,
            page_size: size,
            total_items,
            total_pages,
            start_index,
            end_index,
            clamped: page != requested_page,
        }
    }

    /// Zero-based half-open range of the page within the sequence
    pub fn range(&self) -> std::ops::Range<usize> {
        if self.total_items == 0 {
            return 0..0;
        }
        (self.start_index - 1)..self.end_index
    }

    /// Pagination controls are only worth showing with more than one page
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

/// A borrowed page of items plus its metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub meta: PageMeta,
}

/// Slice `items` into the requested 1-indexed page, clamping out-of-range requests.
pub fn paginate<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> Page<'_, T> {
    let meta = PageMeta::compute(items.len(), page, page_size);
    Page {
        items: &items[meta.range()],
        meta,
    }
}

/// One entry in the row of page buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Page buttons for `current` out of `total_pages`.
///
/// Up to seven pages are listed in full. Beyond that the first and last page
/// stay visible and the run around `current` is kept, with ellipses between.
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages <= WINDOW_COLLAPSE_THRESHOLD {
        return (1..=total_pages).map(PageLink::Page).collect();
    }

    let current = current.clamp(1, total_pages);
    let mut links = Vec::with_capacity(WINDOW_COLLAPSE_THRESHOLD);

    if current <= 3 {
        links.extend((1..=5).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(total_pages));
    } else if current >= total_pages - 2 {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
        links.extend((total_pages - 4..=total_pages).map(PageLink::Page));
    } else {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
        links.extend((current - 1..=current + 1).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(total_pages));
    }

    links
}
