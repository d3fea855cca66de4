//! Entry diffs
//!
//! - `positional`: index-by-index line delta between two texts
//! - `diff_record`: what is kept about an entry that differs between archives

pub mod diff_record;
pub mod positional;
