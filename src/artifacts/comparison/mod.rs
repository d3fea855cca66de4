//! Archive comparison
//!
//! - `comparator`: buckets every normalized entry name of two archives
//! - `comparison_result`: the four buckets and their summary
//! - `archive_pair`: pairing of archives across two directories

pub mod archive_pair;
pub mod comparator;
pub mod comparison_result;
