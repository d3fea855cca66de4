//! Archive contents
//!
//! - `entry`: a single materialized archive member
//! - `entry_set`: members keyed by normalized name, with the collision policy
//! - `zip`: ZIP container parsing and entry decoding

pub mod entry;
pub mod entry_set;
pub mod zip;
