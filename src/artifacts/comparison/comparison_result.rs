use crate::artifacts::diff::diff_record::DiffRecord;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Outcome of comparing two entry sets.
///
/// The four buckets are disjoint and together hold every normalized name
/// found in either archive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonResult {
    pub identical: BTreeSet<String>,
    pub different: BTreeMap<String, DiffRecord>,
    pub only_in_first: BTreeSet<String>,
    pub only_in_second: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub identical: usize,
    pub different: usize,
    pub only_in_first: usize,
    pub only_in_second: usize,
}

impl ComparisonResult {
    pub fn total(&self) -> usize {
        self.identical.len()
            + self.different.len()
            + self.only_in_first.len()
            + self.only_in_second.len()
    }

    /// True when nothing differs and no entry is missing on either side
    pub fn is_identical(&self) -> bool {
        self.different.is_empty() && self.only_in_first.is_empty() && self.only_in_second.is_empty()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total: self.total(),
            identical: self.identical.len(),
            different: self.different.len(),
            only_in_first: self.only_in_first.len(),
            only_in_second: self.only_in_second.len(),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let noun = if self.total == 1 { "entry" } else { "entries" };
        write!(
            f,
            "{} {noun}: {} identical, {} different, {} only in first, {} only in second",
            self.total, self.identical, self.different, self.only_in_first, self.only_in_second
        )
    }
}
