use crate::artifacts::content::classifier::ContentKind;
use crate::artifacts::content::fingerprint::Fingerprint;
use crate::artifacts::naming::{entry_file_name, normalize_entry_name};

/// One file inside an archive, fully materialized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Path inside the archive as stored in the central directory
    raw_name: String,
    /// File name with build codes stripped; the comparison key
    base_name: String,
    size: u64,
    fingerprint: Fingerprint,
    kind: ContentKind,
    /// Decoded content, only kept for text entries
    text: Option<String>,
}

impl Entry {
    pub fn from_bytes(raw_name: &str, data: &[u8]) -> Self {
        let kind = ContentKind::classify(data);
        let text = match kind {
            ContentKind::Text => Some(String::from_utf8_lossy(data).into_owned()),
            ContentKind::Binary => None,
        };

        Entry {
            raw_name: raw_name.to_string(),
            base_name: normalize_entry_name(entry_file_name(raw_name)),
            size: data.len() as u64,
            fingerprint: Fingerprint::of(data),
            kind,
            text,
        }
    }

    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn is_binary(&self) -> bool {
        self.kind.is_binary()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Same content on both sides: equal fingerprint and size
    pub fn has_same_content(&self, other: &Entry) -> bool {
        self.fingerprint == other.fingerprint && self.size == other.size
    }

    /// Tie-break between two entries that normalize to the same base name.
    ///
    /// The shorter raw name wins: it is the one without a build code, i.e.
    /// the canonical artifact. Raw names of equal length are ordered bytewise
    /// so the survivor does not depend on the order entries were read in.
    pub fn supersedes(&self, other: &Entry) -> bool {
        (self.raw_name.len(), self.raw_name.as_str())
            < (other.raw_name.len(), other.raw_name.as_str())
    }
}
