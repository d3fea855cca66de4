use crate::artifacts::archive::entry_set::EntrySet;
use crate::artifacts::comparison::comparison_result::ComparisonResult;
use crate::artifacts::diff::diff_record::DiffRecord;
use derive_new::new;

/// Buckets the entries of two archives by normalized name
#[derive(Debug, new)]
pub struct Comparator<'c> {
    first: &'c EntrySet,
    second: &'c EntrySet,
}

impl Comparator<'_> {
    pub fn compare(&self) -> ComparisonResult {
        let mut result = ComparisonResult::default();

        for (name, first) in self.first.iter() {
            match self.second.get(name) {
                Some(second) if first.has_same_content(second) => {
                    result.identical.insert(name.to_string());
                }
                Some(second) => {
                    result
                        .different
                        .insert(name.to_string(), DiffRecord::new(name, first, second));
                }
                None => {
                    result.only_in_first.insert(name.to_string());
                }
            }
        }

        result.only_in_second = self
            .second
            .names()
            .filter(|name| !self.first.contains(name))
            .map(str::to_string)
            .collect();

        result
    }
}
