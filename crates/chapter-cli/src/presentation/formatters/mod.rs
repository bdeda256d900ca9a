pub mod date;
pub mod text;

pub use date::{format_date_long, format_date_short, format_relative_date};
pub use text::{rule, truncate};
