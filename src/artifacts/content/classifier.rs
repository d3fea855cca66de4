use serde::Serialize;

/// Whether an entry can be shown as text or only compared by fingerprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Text,
    Binary,
}

impl ContentKind {
    /// Classify raw bytes.
    ///
    /// Content is binary when it is not valid UTF-8 or contains a NUL byte.
    /// This is a heuristic: UTF-16 text ends up binary, and a Latin-1 file
    /// that happens to be valid UTF-8 ends up text. Empty content is text.
    pub fn classify(data: &[u8]) -> Self {
        if data.contains(&0) || std::str::from_utf8(data).is_err() {
            ContentKind::Binary
        } else {
            ContentKind::Text
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, ContentKind::Binary)
    }
}
