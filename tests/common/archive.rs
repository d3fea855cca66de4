use std::path::{Path, PathBuf};

#[path = "../../src/artifacts/archive/zip/fixture.rs"]
mod fixture;

use fixture::ZipFixture;

/// A ZIP archive to be written to disk by a test
#[derive(Debug, Clone)]
pub struct ArchiveSpec {
    pub path: PathBuf,
    archive: ZipFixture,
}

impl ArchiveSpec {
    pub fn new(path: impl AsRef<Path>) -> Self {
        ArchiveSpec {
            path: path.as_ref().to_path_buf(),
            archive: ZipFixture::new(),
        }
    }

    pub fn stored(mut self, name: &str, content: impl AsRef<[u8]>) -> Self {
        self.archive = self.archive.stored(name, content);
        self
    }

    pub fn deflated(mut self, name: &str, content: impl AsRef<[u8]>) -> Self {
        self.archive = self.archive.deflated(name, content);
        self
    }

    pub fn directory(mut self, name: &str) -> Self {
        self.archive = self.archive.directory(name);
        self
    }

    /// Add `count` text entries with generated names and content
    pub fn generated(mut self, count: usize) -> Self {
        use fake::{
            Fake,
            faker::lorem::en::{Word, Words},
        };

        for index in 0..count {
            let name = format!("{}-{index}.txt", Word().fake::<String>());
            let content = Words(5..10).fake::<Vec<String>>().join(" ");
            self = self.deflated(&name, content);
        }
        self
    }

    pub fn write(&self) {
        create_parent(&self.path);

        self.archive
            .write_to(&self.path)
            .unwrap_or_else(|e| panic!("Failed to write archive {:?}: {}", self.path, e));
    }
}

/// Archive written by another ZIP tool, checked in under `tests/archives`
pub fn recorded_archive(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/archives")
        .join(name)
}

pub fn write_garbage(path: &Path) {
    create_parent(path);

    std::fs::write(path, b"this is not an archive")
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", path, e));
}

fn create_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }
}
