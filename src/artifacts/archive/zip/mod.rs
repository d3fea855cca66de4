//! ZIP container parser
//!
//! Only the pieces needed to list entries and inflate their content are
//! implemented; writing archives is out of scope.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ local header 1 │ data 1 │ ... │ local header n │ data n │
//! ├──────────────────────────────────────────────┤
//! │ central directory (one record per entry)     │
//! ├──────────────────────────────────────────────┤
//! │ [zip64 end of central directory + locator]   │
//! │ end of central directory (+ comment)         │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The central directory is authoritative: names, sizes, CRCs and offsets are
//! taken from it, and local headers are only used to find where data starts.

pub mod compression;
pub mod error;
#[cfg(test)]
pub(crate) mod fixture;
pub mod record;

use crate::artifacts::archive::zip::compression::CompressionMethod;
use crate::artifacts::archive::zip::error::{ArchiveError, ArchiveResult};
use crate::artifacts::archive::zip::record::{EntryFlags, ZipRecord};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{BufReader, Read, Seek, SeekFrom};

pub const LOCAL_HEADER_SIGNATURE: u32 = 0x04034b50;
pub const CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x02014b50;
pub const END_OF_CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x06054b50;
pub const ZIP64_END_OF_CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x06064b50;
pub const ZIP64_LOCATOR_SIGNATURE: u32 = 0x07064b50;

const ZIP64_EXTRA_FIELD_ID: u16 = 0x0001;
const END_OF_CENTRAL_DIRECTORY_SIZE: usize = 22;
const ZIP64_LOCATOR_SIZE: u64 = 20;
const ZIP64_END_OF_CENTRAL_DIRECTORY_SIZE: u64 = 56;
const MAX_COMMENT_LENGTH: u64 = u16::MAX as u64;
// version needed, flags, method, time, date, crc, compressed and uncompressed size
const LOCAL_HEADER_SKIPPED_FIELDS: i64 = 22;

const MAX_RECORD_PREALLOCATION: u64 = 4096;
const MAX_DATA_PREALLOCATION: u64 = 64 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CentralDirectoryLocation {
    /// Where the (ZIP64) end of central directory record actually starts
    end_record_offset: u64,
    offset: u64,
    size: u64,
    entries: u64,
}

impl CentralDirectoryLocation {
    /// Length of any data prepended to the archive (e.g. a self-extracting
    /// stub).
    ///
    /// Recorded offsets are relative to the start of the archive proper,
    /// which is where the central directory would begin if it ended right
    /// before the end record.
    fn base_offset(&self) -> ArchiveResult<u64> {
        self.end_record_offset
            .checked_sub(self.size)
            .and_then(|start| start.checked_sub(self.offset))
            .ok_or(ArchiveError::InvalidCentralDirectory {
                offset: self.offset,
                size: self.size,
            })
    }
}

/// Reader over a ZIP container with its central directory already parsed
#[derive(Debug)]
pub struct ZipReader<R> {
    reader: R,
    /// Bytes preceding the archive proper; added to every recorded offset
    base_offset: u64,
    records: Vec<ZipRecord>,
}

impl<R: Read + Seek> ZipReader<R> {
    pub fn new(mut reader: R) -> ArchiveResult<Self> {
        let location = Self::locate_central_directory(&mut reader)?;
        let base_offset = location.base_offset()?;
        let records = Self::read_central_directory(&mut reader, location, base_offset)?;

        Ok(ZipReader {
            reader,
            base_offset,
            records,
        })
    }

    /// Central directory records in archive order, directories included
    pub fn records(&self) -> &[ZipRecord] {
        &self.records
    }

    /// Read and decode the full content of one entry.
    ///
    /// The decoded size and CRC-32 must match the central directory.
    pub fn read(&mut self, record: &ZipRecord) -> ArchiveResult<Vec<u8>> {
        if record.is_encrypted() {
            return Err(ArchiveError::Encrypted(record.name.clone()));
        }

        let local_header_offset = self
            .base_offset
            .checked_add(record.local_header_offset)
            .ok_or_else(|| ArchiveError::Truncated {
                name: record.name.clone(),
                expected: record.local_header_offset,
                found: 0,
            })?;
        self.reader.seek(SeekFrom::Start(local_header_offset))?;
        expect_signature(&mut self.reader, LOCAL_HEADER_SIGNATURE)?;

        self.reader
            .seek(SeekFrom::Current(LOCAL_HEADER_SKIPPED_FIELDS))?;
        let name_length = self.reader.read_u16::<LittleEndian>()?;
        let extra_length = self.reader.read_u16::<LittleEndian>()?;
        self.reader.seek(SeekFrom::Current(
            i64::from(name_length) + i64::from(extra_length),
        ))?;

        let mut data =
            Vec::with_capacity(record.compressed_size.min(MAX_DATA_PREALLOCATION) as usize);
        let read = (&mut self.reader)
            .take(record.compressed_size)
            .read_to_end(&mut data)? as u64;
        if read != record.compressed_size {
            return Err(ArchiveError::Truncated {
                name: record.name.clone(),
                expected: record.compressed_size,
                found: read,
            });
        }

        let content = record
            .compression
            .decode(&record.name, data, record.uncompressed_size)?;

        if content.len() as u64 != record.uncompressed_size {
            return Err(ArchiveError::SizeMismatch {
                name: record.name.clone(),
                expected: record.uncompressed_size,
                found: content.len() as u64,
            });
        }

        let mut crc = flate2::Crc::new();
        crc.update(&content);
        if crc.sum() != record.crc32 {
            return Err(ArchiveError::ChecksumMismatch {
                name: record.name.clone(),
                expected: record.crc32,
                found: crc.sum(),
            });
        }

        Ok(content)
    }

    fn locate_central_directory(reader: &mut R) -> ArchiveResult<CentralDirectoryLocation> {
        let file_size = reader.seek(SeekFrom::End(0))?;

        // the record sits at the very end, followed by a comment of up to 64KiB
        let search_start =
            file_size.saturating_sub(END_OF_CENTRAL_DIRECTORY_SIZE as u64 + MAX_COMMENT_LENGTH);
        reader.seek(SeekFrom::Start(search_start))?;

        let mut tail = Vec::with_capacity((file_size - search_start) as usize);
        reader.read_to_end(&mut tail)?;

        if tail.len() < END_OF_CENTRAL_DIRECTORY_SIZE {
            return Err(ArchiveError::MissingEndOfCentralDirectory);
        }

        let signature = END_OF_CENTRAL_DIRECTORY_SIGNATURE.to_le_bytes();
        let record_index = (0..=tail.len() - END_OF_CENTRAL_DIRECTORY_SIZE)
            .rev()
            .find(|&index| tail[index..index + 4] == signature)
            .ok_or(ArchiveError::MissingEndOfCentralDirectory)?;

        // skip signature, disk number, central directory disk, entries on this disk
        let mut record = &tail[record_index + 10..];
        let entries = record.read_u16::<LittleEndian>()?;
        let size = record.read_u32::<LittleEndian>()?;
        let offset = record.read_u32::<LittleEndian>()?;
        let end_record_offset = search_start + record_index as u64;

        if entries == u16::MAX || size == u32::MAX || offset == u32::MAX {
            return Self::locate_zip64_central_directory(reader, end_record_offset);
        }

        Ok(CentralDirectoryLocation {
            end_record_offset,
            offset: u64::from(offset),
            size: u64::from(size),
            entries: u64::from(entries),
        })
    }

    fn locate_zip64_central_directory(
        reader: &mut R,
        end_record_offset: u64,
    ) -> ArchiveResult<CentralDirectoryLocation> {
        let locator_offset = end_record_offset
            .checked_sub(ZIP64_LOCATOR_SIZE)
            .ok_or(ArchiveError::MissingEndOfCentralDirectory)?;
        reader.seek(SeekFrom::Start(locator_offset))?;
        expect_signature(reader, ZIP64_LOCATOR_SIGNATURE)?;

        let _disk = reader.read_u32::<LittleEndian>()?;
        let recorded_offset = reader.read_u64::<LittleEndian>()?;

        // the recorded offset ignores prepended data; a record that does not
        // start there sits right before the locator, without extensible data
        let zip64_record_offset = if Self::has_signature_at(
            reader,
            recorded_offset,
            ZIP64_END_OF_CENTRAL_DIRECTORY_SIGNATURE,
        )? {
            recorded_offset
        } else {
            locator_offset
                .checked_sub(ZIP64_END_OF_CENTRAL_DIRECTORY_SIZE)
                .ok_or(ArchiveError::MissingEndOfCentralDirectory)?
        };

        reader.seek(SeekFrom::Start(zip64_record_offset))?;
        expect_signature(reader, ZIP64_END_OF_CENTRAL_DIRECTORY_SIGNATURE)?;

        // record size, versions, disk numbers, entries on this disk
        reader.seek(SeekFrom::Current(8 + 2 + 2 + 4 + 4 + 8))?;
        let entries = reader.read_u64::<LittleEndian>()?;
        let size = reader.read_u64::<LittleEndian>()?;
        let offset = reader.read_u64::<LittleEndian>()?;

        Ok(CentralDirectoryLocation {
            end_record_offset: zip64_record_offset,
            offset,
            size,
            entries,
        })
    }

    fn has_signature_at(reader: &mut R, offset: u64, signature: u32) -> ArchiveResult<bool> {
        reader.seek(SeekFrom::Start(offset))?;
        match reader.read_u32::<LittleEndian>() {
            Ok(found) => Ok(found == signature),
            Err(error) if error.kind() == std::io::ErrorKind::UnexpectedEof => Ok(false),
            Err(error) => Err(error.into()),
        }
    }

    fn read_central_directory(
        reader: &mut R,
        location: CentralDirectoryLocation,
        base_offset: u64,
    ) -> ArchiveResult<Vec<ZipRecord>> {
        reader.seek(SeekFrom::Start(base_offset + location.offset))?;
        let mut reader = BufReader::new(reader);

        let mut records =
            Vec::with_capacity(location.entries.min(MAX_RECORD_PREALLOCATION) as usize);
        for _ in 0..location.entries {
            records.push(Self::read_record(&mut reader)?);
        }

        Ok(records)
    }

    fn read_record(reader: &mut impl Read) -> ArchiveResult<ZipRecord> {
        expect_signature(reader, CENTRAL_DIRECTORY_SIGNATURE)?;

        let version_made_by = reader.read_u16::<LittleEndian>()?;
        let _version_needed = reader.read_u16::<LittleEndian>()?;
        let flags = EntryFlags::from_bits_retain(reader.read_u16::<LittleEndian>()?);
        let compression = CompressionMethod::from(reader.read_u16::<LittleEndian>()?);
        let _modified_time = reader.read_u16::<LittleEndian>()?;
        let _modified_date = reader.read_u16::<LittleEndian>()?;
        let crc32 = reader.read_u32::<LittleEndian>()?;
        let compressed_size = reader.read_u32::<LittleEndian>()?;
        let uncompressed_size = reader.read_u32::<LittleEndian>()?;
        let name_length = reader.read_u16::<LittleEndian>()?;
        let extra_length = reader.read_u16::<LittleEndian>()?;
        let comment_length = reader.read_u16::<LittleEndian>()?;
        let _disk_start = reader.read_u16::<LittleEndian>()?;
        let _internal_attributes = reader.read_u16::<LittleEndian>()?;
        let external_attributes = reader.read_u32::<LittleEndian>()?;
        let local_header_offset = reader.read_u32::<LittleEndian>()?;

        let name = read_bytes(reader, name_length)?;
        let extra = read_bytes(reader, extra_length)?;
        read_bytes(reader, comment_length)?;

        let mut record = ZipRecord {
            name: String::from_utf8_lossy(&name).into_owned(),
            version_made_by,
            flags,
            compression,
            crc32,
            compressed_size: u64::from(compressed_size),
            uncompressed_size: u64::from(uncompressed_size),
            external_attributes,
            local_header_offset: u64::from(local_header_offset),
        };
        apply_zip64_extra(&mut record, &extra)?;

        Ok(record)
    }
}

fn expect_signature(reader: &mut impl Read, expected: u32) -> ArchiveResult<()> {
    let found = reader.read_u32::<LittleEndian>()?;
    if found != expected {
        return Err(ArchiveError::InvalidSignature { expected, found });
    }

    Ok(())
}

fn read_bytes(reader: &mut impl Read, length: u16) -> ArchiveResult<Vec<u8>> {
    let mut buffer = vec![0u8; usize::from(length)];
    reader.read_exact(&mut buffer)?;
    Ok(buffer)
}

/// Replace saturated 32-bit fields with the values of the ZIP64 extra field.
///
/// Only the fields whose 32-bit value is `0xFFFFFFFF` are present in the
/// extra field, in the order uncompressed size, compressed size, offset.
fn apply_zip64_extra(record: &mut ZipRecord, mut extra: &[u8]) -> ArchiveResult<()> {
    const SATURATED: u64 = u32::MAX as u64;

    while extra.len() >= 4 {
        let id = extra.read_u16::<LittleEndian>()?;
        let size = usize::from(extra.read_u16::<LittleEndian>()?).min(extra.len());
        let (mut field, rest) = extra.split_at(size);
        extra = rest;

        if id != ZIP64_EXTRA_FIELD_ID {
            continue;
        }

        if record.uncompressed_size == SATURATED {
            record.uncompressed_size = field.read_u64::<LittleEndian>()?;
        }
        if record.compressed_size == SATURATED {
            record.compressed_size = field.read_u64::<LittleEndian>()?;
        }
        if record.local_header_offset == SATURATED {
            record.local_header_offset = field.read_u64::<LittleEndian>()?;
        }
    }

    Ok(())
}
