#![deny(unsafe_code)]

//! View derivation over scored rows: filter, sort, page, board and detail.
//!
//! Sorting runs before filtering and paging runs on the filtered result, so
//! the visible page always reflects the current sort.

pub mod board;
pub mod detail;
pub mod filter;
pub mod page;
pub mod sort;
pub mod tags;

pub use board::{Board, BoardLane, group_board};
pub use detail::{CandidateDetail, Subscore, UNKNOWN_CANDIDATE, display_name, initials};
pub use filter::{apply_filters, domain_matched, experience_years, matches_filter};
pub use page::{DEFAULT_PAGE_SIZE, PageInfo, Pagination};
pub use sort::apply_sort;
pub use tags::split_tags;
