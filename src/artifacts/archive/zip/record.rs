use crate::artifacts::archive::zip::compression::CompressionMethod;
use bitflags::bitflags;

/// Host system recorded in the high byte of "version made by"
const HOST_MS_DOS: u8 = 0;
const HOST_UNIX: u8 = 3;
const HOST_NTFS: u8 = 11;
const HOST_VFAT: u8 = 14;
const HOST_MACOS: u8 = 19;

const MS_DOS_DIRECTORY_ATTRIBUTE: u32 = 0x10;
const UNIX_FILE_TYPE_MASK: u32 = 0o170000;
const UNIX_DIRECTORY_TYPE: u32 = 0o040000;

bitflags! {
    /// General purpose bit flags of a ZIP entry
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EntryFlags: u16 {
        const ENCRYPTED = 0x0001;
        const DATA_DESCRIPTOR = 0x0008;
        const STRONG_ENCRYPTION = 0x0040;
        const UTF8_NAME = 0x0800;
    }
}

/// One central directory file header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipRecord {
    pub name: String,
    pub version_made_by: u16,
    pub flags: EntryFlags,
    pub compression: CompressionMethod,
    pub crc32: u32,
    pub compressed_size: u64,
    pub uncompressed_size: u64,
    pub external_attributes: u32,
    pub local_header_offset: u64,
}

impl ZipRecord {
    pub fn is_directory(&self) -> bool {
        if self.name.ends_with('/') {
            return true;
        }

        match (self.version_made_by >> 8) as u8 {
            HOST_MS_DOS | HOST_NTFS | HOST_VFAT => {
                self.external_attributes & MS_DOS_DIRECTORY_ATTRIBUTE != 0
            }
            HOST_UNIX | HOST_MACOS => {
                (self.external_attributes >> 16) & UNIX_FILE_TYPE_MASK == UNIX_DIRECTORY_TYPE
            }
            _ => false,
        }
    }

    pub fn is_encrypted(&self) -> bool {
        self.flags
            .intersects(EntryFlags::ENCRYPTED | EntryFlags::STRONG_ENCRYPTION)
    }
}
