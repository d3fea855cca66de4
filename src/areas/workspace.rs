use crate::artifacts::naming::ARCHIVE_EXTENSION;
use anyhow::Context;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Invalid command line input, reported before any comparison starts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("cannot access {0}")]
    Inaccessible(PathBuf),
    #[error("{first} and {second} must both be files or both be directories")]
    MixedKinds { first: PathBuf, second: PathBuf },
}

/// What the two positional inputs point at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Files,
    Directories,
}

impl InputKind {
    pub fn detect(first: &Path, second: &Path) -> Result<Self, UsageError> {
        let first_kind = Self::of(first)?;
        let second_kind = Self::of(second)?;

        if first_kind != second_kind {
            return Err(UsageError::MixedKinds {
                first: first.to_path_buf(),
                second: second.to_path_buf(),
            });
        }

        Ok(first_kind)
    }

    fn of(path: &Path) -> Result<Self, UsageError> {
        let metadata =
            std::fs::metadata(path).map_err(|_| UsageError::Inaccessible(path.to_path_buf()))?;

        if metadata.is_dir() {
            Ok(InputKind::Directories)
        } else {
            Ok(InputKind::Files)
        }
    }
}

/// A directory holding archives to compare
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: &Path) -> Self {
        Workspace { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Archives directly inside the directory, sorted by file name.
    ///
    /// Symlinks are followed, so a link to an archive is listed like the
    /// archive itself. Dangling links are skipped.
    pub fn list_archives(&self) -> anyhow::Result<Vec<PathBuf>> {
        WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) if !entry.path().is_file() => None,
                Ok(entry) if !Self::is_archive(entry.path()) => None,
                Ok(entry) => Some(Ok(entry.into_path())),
                Err(error) => Some(Err(error)),
            })
            .collect::<Result<Vec<_>, _>>()
            .context(format!("Unable to list archives in {}", self.path.display()))
    }

    fn is_archive(path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(ARCHIVE_EXTENSION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("Failed to create temp dir")
    }

    #[rstest]
    fn lists_only_top_level_archives(temp_dir: TempDir) -> anyhow::Result<()> {
        temp_dir.child("b_2.zip").touch()?;
        temp_dir.child("a_1.zip").touch()?;
        temp_dir.child("notes.txt").touch()?;
        temp_dir.child("nested").child("c_1.zip").touch()?;
        temp_dir.child("folder.zip").create_dir_all()?;

        let archives = Workspace::new(temp_dir.path()).list_archives()?;

        assert_eq!(
            archives,
            vec![temp_dir.path().join("a_1.zip"), temp_dir.path().join("b_2.zip")]
        );

        Ok(())
    }

    #[cfg(unix)]
    #[rstest]
    fn lists_symlinked_archives(temp_dir: TempDir) -> anyhow::Result<()> {
        let target = temp_dir.child("store").child("build.zip");
        target.write_binary(b"archive")?;
        temp_dir.child("builds").create_dir_all()?;
        std::fs::copy(target.path(), temp_dir.path().join("builds/real_1.zip"))?;
        std::os::unix::fs::symlink(target.path(), temp_dir.path().join("builds/linked_1.zip"))?;
        std::os::unix::fs::symlink(
            temp_dir.path().join("missing.zip"),
            temp_dir.path().join("builds/dangling_1.zip"),
        )?;

        let archives = Workspace::new(&temp_dir.path().join("builds")).list_archives()?;

        assert_eq!(
            archives,
            vec![
                temp_dir.path().join("builds/linked_1.zip"),
                temp_dir.path().join("builds/real_1.zip"),
            ]
        );

        Ok(())
    }

    #[rstest]
    fn missing_directory_fails(temp_dir: TempDir) {
        let result = Workspace::new(&temp_dir.path().join("missing")).list_archives();

        assert!(result.is_err());
    }

    #[rstest]
    fn detects_input_kinds(temp_dir: TempDir) -> anyhow::Result<()> {
        let file = temp_dir.child("a.zip");
        file.touch()?;
        let dir = temp_dir.child("dir");
        dir.create_dir_all()?;
        let missing = temp_dir.child("missing.zip");

        assert_eq!(
            InputKind::detect(file.path(), file.path()),
            Ok(InputKind::Files)
        );
        assert_eq!(
            InputKind::detect(dir.path(), temp_dir.path()),
            Ok(InputKind::Directories)
        );
        assert_eq!(
            InputKind::detect(file.path(), dir.path()),
            Err(UsageError::MixedKinds {
                first: file.path().to_path_buf(),
                second: dir.path().to_path_buf(),
            })
        );
        assert_eq!(
            InputKind::detect(file.path(), missing.path()),
            Err(UsageError::Inaccessible(missing.path().to_path_buf()))
        );

        Ok(())
    }
}
