//! Serializable view of a comparison
//!
//! A report is what gets persisted for later inspection: the sources that
//! were compared, every bucket, full diff records and the summary counts.

use crate::artifacts::comparison::comparison_result::{ComparisonResult, Summary};
use crate::artifacts::diff::diff_record::DiffRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'r> {
    generated_at: DateTime<Utc>,
    first_source: String,
    second_source: String,
    identical: Vec<&'r str>,
    different: Vec<&'r DiffRecord>,
    only_in_first: Vec<&'r str>,
    only_in_second: Vec<&'r str>,
    summary: Summary,
}

impl<'r> Report<'r> {
    pub fn new(
        result: &'r ComparisonResult,
        first: &Path,
        second: &Path,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Report {
            generated_at,
            first_source: first.display().to_string(),
            second_source: second.display().to_string(),
            identical: result.identical.iter().map(String::as_str).collect(),
            different: result.different.values().collect(),
            only_in_first: result.only_in_first.iter().map(String::as_str).collect(),
            only_in_second: result.only_in_second.iter().map(String::as_str).collect(),
            summary: result.summary(),
        }
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
