use crate::artifacts::archive::entry::Entry;
use crate::artifacts::archive::entry_set::EntrySet;
use crate::artifacts::archive::zip::ZipReader;
use crate::artifacts::comparison::comparator::Comparator;
use crate::artifacts::comparison::comparison_result::ComparisonResult;
use anyhow::Context;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// A ZIP archive on disk
#[derive(Debug)]
pub struct Archive {
    path: Box<Path>,
}

impl Archive {
    pub fn new(path: &Path) -> Self {
        Archive { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every file entry of the archive.
    ///
    /// Directories are skipped. The first entry that cannot be decoded
    /// fails the whole read.
    pub fn read_entries(&self) -> anyhow::Result<EntrySet> {
        let file = File::open(&self.path)
            .context(format!("Unable to open archive {}", self.path.display()))?;
        let mut zip = ZipReader::new(BufReader::new(file))
            .context(format!("Unable to parse archive {}", self.path.display()))?;

        let records = zip.records().to_vec();
        let mut entries = EntrySet::new();

        for record in records.iter().filter(|record| !record.is_directory()) {
            let data = zip.read(record).context(format!(
                "Unable to read entry {} of {}",
                record.name,
                self.path.display()
            ))?;
            let entry = Entry::from_bytes(&record.name, &data);
            debug!(
                archive = %self.path.display(),
                entry = entry.raw_name(),
                base_name = entry.base_name(),
                size = entry.size(),
                kind = ?entry.kind(),
                "read entry"
            );

            if let Some(dropped) = entries.insert(entry) {
                debug!(
                    archive = %self.path.display(),
                    base_name = dropped.base_name(),
                    dropped = dropped.raw_name(),
                    "name collision resolved"
                );
            }
        }

        info!(
            archive = %self.path.display(),
            entries = entries.len(),
            "archive read"
        );

        Ok(entries)
    }

    /// Compare this archive (first side) against `other` (second side)
    pub fn compare(&self, other: &Archive) -> anyhow::Result<ComparisonResult> {
        let first = self.read_entries().context("error reading first archive")?;
        let second = other
            .read_entries()
            .context("error reading second archive")?;

        Ok(Comparator::new(&first, &second).compare())
    }
}
