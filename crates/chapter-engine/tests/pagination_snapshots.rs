use chapter_engine::{PageMeta, page_window};
use std::num::NonZeroUsize;

#[test]
fn test_middle_page_meta_snapshot() {
    let meta = PageMeta::compute(14, 2, NonZeroUsize::new(6).unwrap());
    insta::assert_json_snapshot!("middle_page_meta", meta);
}

#[test]
fn test_clamped_page_meta_snapshot() {
    let meta = PageMeta::compute(14, 8, NonZeroUsize::new(6).unwrap());
    insta::assert_json_snapshot!("clamped_page_meta", meta);
}

#[test]
fn test_collapsed_window_snapshot() {
    let window = page_window(5, 12);
    insta::assert_json_snapshot!("collapsed_window", window);
}
