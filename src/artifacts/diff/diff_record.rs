use crate::artifacts::archive::entry::Entry;
use crate::artifacts::content::fingerprint::Fingerprint;
use crate::artifacts::diff::positional::generate_delta;
use serde::Serialize;

/// Size and fingerprint of one side of a differing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySnapshot {
    pub size: u64,
    pub fingerprint: Fingerprint,
}

impl From<&Entry> for EntrySnapshot {
    fn from(entry: &Entry) -> Self {
        EntrySnapshot {
            size: entry.size(),
            fingerprint: entry.fingerprint().clone(),
        }
    }
}

/// An entry present in both archives with different content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRecord {
    pub name: String,
    /// Either side is binary; no delta is produced then
    pub binary: bool,
    pub delta: String,
    pub first: EntrySnapshot,
    pub second: EntrySnapshot,
}

impl DiffRecord {
    pub fn new(name: &str, first: &Entry, second: &Entry) -> Self {
        let delta = match (first.text(), second.text()) {
            (Some(a), Some(b)) => generate_delta(a, b, name),
            _ => String::new(),
        };

        DiffRecord {
            name: name.to_string(),
            binary: first.is_binary() || second.is_binary(),
            delta,
            first: first.into(),
            second: second.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_entries_carry_a_delta() {
        let first = Entry::from_bytes("notes.txt", b"a\nb");
        let second = Entry::from_bytes("notes_1f2e3d.txt", b"a\nc");

        let record = DiffRecord::new("notes.txt", &first, &second);

        assert!(!record.binary);
        assert_eq!(
            record.delta,
            "--- notes.txt (archive 1)\n+++ notes.txt (archive 2)\n-b\n+c\n"
        );
        assert_eq!(record.first.size, 3);
        assert_eq!(record.second.fingerprint, Fingerprint::of(b"a\nc"));
    }

    #[test]
    fn binary_on_either_side_skips_the_delta() {
        let text = Entry::from_bytes("blob.dat", b"plain");
        let binary = Entry::from_bytes("blob.dat", b"\0\x01\x02");

        let record = DiffRecord::new("blob.dat", &text, &binary);

        assert!(record.binary);
        assert_eq!(record.delta, "");
        assert_eq!(record.second.size, 3);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let first = Entry::from_bytes("a.txt", b"1");
        let second = Entry::from_bytes("a.txt", b"2");

        let json = serde_json::to_value(DiffRecord::new("a.txt", &first, &second))
            .expect("record serializes");

        assert_eq!(json["name"], "a.txt");
        assert_eq!(json["binary"], false);
        assert_eq!(json["first"]["size"], 1);
        assert_eq!(
            json["first"]["fingerprint"],
            Fingerprint::of(b"1").as_ref()
        );
    }
}
