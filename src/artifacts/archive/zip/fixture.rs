//! In-memory ZIP writer for building test archives
//!
//! Shared by the unit tests and the integration tests (through `#[path]`),
//! so it only depends on `byteorder` and `flate2`.

use byteorder::{LittleEndian, WriteBytesExt};
use flate2::Compression;
use flate2::write::DeflateEncoder;
use std::io::{self, Write};
use std::path::Path;

const LOCAL_HEADER_SIGNATURE: u32 = 0x04034b50;
const CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x02014b50;
const END_OF_CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x06054b50;

const STORE: u16 = 0;
const DEFLATE: u16 = 8;
const UTF8_NAME: u16 = 1 << 11;
const VERSION_MADE_BY_UNIX: u16 = (3 << 8) | 20;
const VERSION_NEEDED: u16 = 20;
// 1980-01-01 00:00
const DOS_DATE: u16 = 0x0021;
const UNIX_FILE_MODE: u32 = 0o100644;
const UNIX_DIRECTORY_MODE: u32 = 0o040755;

#[derive(Debug, Clone)]
struct FixtureEntry {
    name: String,
    method: u16,
    content: Vec<u8>,
    directory: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ZipFixture {
    entries: Vec<FixtureEntry>,
    comment: String,
}

impl ZipFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(self, name: &str, content: impl AsRef<[u8]>) -> Self {
        self.entry(name, STORE, content.as_ref(), false)
    }

    pub fn deflated(self, name: &str, content: impl AsRef<[u8]>) -> Self {
        self.entry(name, DEFLATE, content.as_ref(), false)
    }

    pub fn directory(self, name: &str) -> Self {
        self.entry(name, STORE, &[], true)
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = comment.to_string();
        self
    }

    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        std::fs::write(path, self.build()?)
    }

    pub fn build(&self) -> io::Result<Vec<u8>> {
        let mut archive = Vec::new();
        let mut central_directory = Vec::new();

        for entry in &self.entries {
            let offset = archive.len() as u32;
            let mut crc = flate2::Crc::new();
            crc.update(&entry.content);
            let data = if entry.method == DEFLATE {
                let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(&entry.content)?;
                encoder.finish()?
            } else {
                entry.content.clone()
            };
            let mode = if entry.directory {
                UNIX_DIRECTORY_MODE
            } else {
                UNIX_FILE_MODE
            };

            archive.write_u32::<LittleEndian>(LOCAL_HEADER_SIGNATURE)?;
            archive.write_u16::<LittleEndian>(VERSION_NEEDED)?;
            archive.write_u16::<LittleEndian>(UTF8_NAME)?;
            archive.write_u16::<LittleEndian>(entry.method)?;
            archive.write_u16::<LittleEndian>(0)?;
            archive.write_u16::<LittleEndian>(DOS_DATE)?;
            archive.write_u32::<LittleEndian>(crc.sum())?;
            archive.write_u32::<LittleEndian>(data.len() as u32)?;
            archive.write_u32::<LittleEndian>(entry.content.len() as u32)?;
            archive.write_u16::<LittleEndian>(entry.name.len() as u16)?;
            archive.write_u16::<LittleEndian>(0)?;
            archive.write_all(entry.name.as_bytes())?;
            archive.write_all(&data)?;

            central_directory.write_u32::<LittleEndian>(CENTRAL_DIRECTORY_SIGNATURE)?;
            central_directory.write_u16::<LittleEndian>(VERSION_MADE_BY_UNIX)?;
            central_directory.write_u16::<LittleEndian>(VERSION_NEEDED)?;
            central_directory.write_u16::<LittleEndian>(UTF8_NAME)?;
            central_directory.write_u16::<LittleEndian>(entry.method)?;
            central_directory.write_u16::<LittleEndian>(0)?;
            central_directory.write_u16::<LittleEndian>(DOS_DATE)?;
            central_directory.write_u32::<LittleEndian>(crc.sum())?;
            central_directory.write_u32::<LittleEndian>(data.len() as u32)?;
            central_directory.write_u32::<LittleEndian>(entry.content.len() as u32)?;
            central_directory.write_u16::<LittleEndian>(entry.name.len() as u16)?;
            // extra and comment length, disk number, internal attributes
            central_directory.write_u16::<LittleEndian>(0)?;
            central_directory.write_u16::<LittleEndian>(0)?;
            central_directory.write_u16::<LittleEndian>(0)?;
            central_directory.write_u16::<LittleEndian>(0)?;
            central_directory.write_u32::<LittleEndian>(mode << 16)?;
            central_directory.write_u32::<LittleEndian>(offset)?;
            central_directory.write_all(entry.name.as_bytes())?;
        }

        let central_directory_offset = archive.len() as u32;
        archive.write_all(&central_directory)?;

        archive.write_u32::<LittleEndian>(END_OF_CENTRAL_DIRECTORY_SIGNATURE)?;
        archive.write_u16::<LittleEndian>(0)?;
        archive.write_u16::<LittleEndian>(0)?;
        archive.write_u16::<LittleEndian>(self.entries.len() as u16)?;
        archive.write_u16::<LittleEndian>(self.entries.len() as u16)?;
        archive.write_u32::<LittleEndian>(central_directory.len() as u32)?;
        archive.write_u32::<LittleEndian>(central_directory_offset)?;
        archive.write_u16::<LittleEndian>(self.comment.len() as u16)?;
        archive.write_all(self.comment.as_bytes())?;

        Ok(archive)
    }

    fn entry(mut self, name: &str, method: u16, content: &[u8], directory: bool) -> Self {
        self.entries.push(FixtureEntry {
            name: name.to_string(),
            method,
            content: content.to_vec(),
            directory,
        });
        self
    }
}
