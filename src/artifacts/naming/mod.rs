//! Name normalization
//!
//! Build pipelines stamp their artifacts with commit hashes or build ids
//! (`report_3fa9c1d.txt`, `bundle_20240101.zip`). Comparison keys are derived
//! from names with those stamps removed so that the same logical file pairs
//! up across two builds.
//!
//! Two independent rules exist:
//!
//! - entry names: drop a trailing `_<code>` where `<code>` is an alphanumeric
//!   run of at least 6 characters placed right before the final extension
//! - archive names: drop the `.zip` extension and everything from the last
//!   underscore onward

use regex::Regex;
use std::sync::LazyLock;

/// Entry names ending in `_<code>` (optionally followed by one extension)
pub const ENTRY_SUFFIX_REGEX: &str = r"^(.+)_[a-zA-Z0-9]{6,}(\.[^.]*)?$";

/// Extension of the archives handled in directory mode
pub const ARCHIVE_EXTENSION: &str = ".zip";

static ENTRY_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ENTRY_SUFFIX_REGEX).expect("entry suffix pattern is a valid regex")
});

/// Strip build codes from an entry file name (no directory component).
///
/// The suffix is stripped repeatedly, so `a_abcdef_123456.txt` and
/// `a_123456.txt` both become `a.txt`. Names that do not carry a code are
/// returned unchanged.
pub fn normalize_entry_name(file_name: &str) -> String {
    let mut name = file_name.to_string();

    while let Some(captures) = ENTRY_SUFFIX.captures(&name) {
        let stem = captures.get(1).map_or("", |m| m.as_str());
        let extension = captures.get(2).map_or("", |m| m.as_str());
        name = format!("{stem}{extension}");
    }

    name
}

/// Strip the archive extension and the trailing `_<token>` from an archive
/// file name.
///
/// Unlike [`normalize_entry_name`] this rule is purely positional and is
/// applied once: `release_20230815_final.zip` becomes `release_20230815`.
pub fn normalize_archive_name(archive_name: &str) -> String {
    let name = archive_name
        .strip_suffix(ARCHIVE_EXTENSION)
        .unwrap_or(archive_name);

    match name.rfind('_') {
        Some(index) => name[..index].to_string(),
        None => name.to_string(),
    }
}

/// Last `/`-separated component of a path stored inside an archive
pub fn entry_file_name(raw_name: &str) -> &str {
    raw_name.rsplit('/').next().unwrap_or(raw_name)
}
