//! Core data types and algorithms
//!
//! - `archive`: ZIP parsing and the entries read from an archive
//! - `comparison`: bucketing of entries and pairing of archives
//! - `content`: text/binary classification and fingerprints
//! - `diff`: positional line deltas
//! - `naming`: build-code stripping for entry and archive names
//! - `report`: serializable comparison report

pub mod archive;
pub mod comparison;
pub mod content;
pub mod diff;
pub mod naming;
pub mod report;
