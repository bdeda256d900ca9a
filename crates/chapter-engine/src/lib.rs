// Engine module - pure content logic (bucketing, paging, listings)
// This layer sits between typed content (types) and CLI presentation.
// Nothing here performs I/O or reads the clock except `today()`.

pub mod listing;
pub mod paginate;
pub mod partition;
pub mod roster;
pub mod timeline;

pub use listing::{
    ActivityListing, ActivityListingView, EventListing, EventListingView, PagedBucket,
};
pub use paginate::{
    DEFAULT_PAGE_SIZE, Page, PageLink, PageMeta, default_page_size, page_window, paginate,
};
pub use partition::{Partition, partition_by_date, today};
pub use roster::{Roster, initials};
pub use timeline::{Timeline, TIMELINE_PAST_LIMIT};
