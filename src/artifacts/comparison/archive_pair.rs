use crate::artifacts::naming::normalize_archive_name;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Two archives whose file names normalize to the same base name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePair {
    pub base_name: String,
    pub first: PathBuf,
    pub second: PathBuf,
}

fn archive_base_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    normalize_archive_name(&file_name)
}

/// Pair archives of two listings by normalized file name.
///
/// Pairs follow the order of `first`. When several archives of `second`
/// share a base name the last one listed is used. Archives without a
/// counterpart are dropped.
pub fn pair_archives(first: &[PathBuf], second: &[PathBuf]) -> Vec<ArchivePair> {
    let by_base_name = second
        .iter()
        .map(|path| (archive_base_name(path), path))
        .collect::<HashMap<_, _>>();

    first
        .iter()
        .filter_map(|path| {
            let base_name = archive_base_name(path);
            by_base_name.get(&base_name).map(|other| ArchivePair {
                base_name,
                first: path.clone(),
                second: (*other).clone(),
            })
        })
        .collect()
}
