//! Positional line diff
//!
//! Lines are compared index by index; there is no realignment after an
//! inserted or removed line, so everything after such a line shows up as
//! changed. Report consumers rely on this exact output, so it must not be
//! swapped for a minimal-edit (LCS/Myers) diff.

use derive_new::new;
use std::fmt::Display;

const FIRST_LABEL: &str = "archive 1";
const SECOND_LABEL: &str = "archive 2";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
}

impl<T> Edit<T>
where
    T: AsRef<str>,
{
    pub fn as_string(&self) -> String {
        match self {
            Edit::Delete { value } => format!("-{}", value.as_ref()),
            Edit::Insert { value } => format!("+{}", value.as_ref()),
        }
    }
}

impl<T> Display for Edit<T>
where
    T: AsRef<str>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

pub trait DiffAlgorithm<'d> {
    fn diff(&self) -> Vec<Edit<&'d str>>;

    fn format_diff(&self) -> String {
        self.diff()
            .iter()
            .map(|edit| format!("{edit}\n"))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PositionalDiff<'d> {
    a: &'d str,
    b: &'d str,
}

impl<'d> DiffAlgorithm<'d> for PositionalDiff<'d> {
    fn diff(&self) -> Vec<Edit<&'d str>> {
        let a = self.a.split('\n').collect::<Vec<_>>();
        let b = self.b.split('\n').collect::<Vec<_>>();
        let mut edits = Vec::new();

        for index in 0..a.len().max(b.len()) {
            let old = a.get(index);
            let new = b.get(index);

            if old.unwrap_or(&"") == new.unwrap_or(&"") {
                continue;
            }

            if let Some(old) = old {
                edits.push(Edit::Delete { value: *old });
            }
            if let Some(new) = new {
                edits.push(Edit::Insert { value: *new });
            }
        }

        edits
    }
}

/// Delta between two text contents of the entry `name`.
///
/// Byte-equal contents produce an empty string; otherwise the delta starts
/// with a `---`/`+++` header naming the entry and both sides.
pub fn generate_delta(first: &str, second: &str, name: &str) -> String {
    if first == second {
        return String::new();
    }

    format!(
        "--- {name} ({FIRST_LABEL})\n+++ {name} ({SECOND_LABEL})\n{}",
        PositionalDiff::new(first, second).format_diff()
    )
}
