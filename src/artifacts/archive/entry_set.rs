use crate::artifacts::archive::entry::Entry;
use std::collections::HashMap;

/// Entries of one archive keyed by normalized base name.
///
/// Holds at most one entry per base name; collisions are settled by
/// [`Entry::supersedes`].
#[derive(Debug, Clone, Default)]
pub struct EntrySet {
    entries: HashMap<String, Entry>,
}

impl EntrySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the one that lost the collision if any
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        let keeps_existing = self
            .entries
            .get(entry.base_name())
            .is_some_and(|existing| !entry.supersedes(existing));
        if keeps_existing {
            return Some(entry);
        }

        self.entries.insert(entry.base_name().to_string(), entry)
    }

    pub fn get(&self, base_name: &str) -> Option<&Entry> {
        self.entries.get(base_name)
    }

    pub fn contains(&self, base_name: &str) -> bool {
        self.entries.contains_key(base_name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Entry> for EntrySet {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut set = EntrySet::new();
        for entry in iter {
            set.insert(entry);
        }
        set
    }
}
