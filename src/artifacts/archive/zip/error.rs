use thiserror::Error;

/// Failures while decoding a ZIP container
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("end of central directory record not found")]
    MissingEndOfCentralDirectory,

    #[error("central directory of {size} bytes at {offset} does not fit before its end record")]
    InvalidCentralDirectory { offset: u64, size: u64 },

    #[error("invalid signature: expected {expected:#010x}, found {found:#010x}")]
    InvalidSignature { expected: u32, found: u32 },

    #[error("unsupported compression method {method} for entry {name}")]
    UnsupportedCompression { name: String, method: u16 },

    #[error("entry {0} is encrypted")]
    Encrypted(String),

    #[error("entry {name} is truncated: expected {expected} bytes, found {found}")]
    Truncated {
        name: String,
        expected: u64,
        found: u64,
    },

    #[error("entry {name} has size {found}, central directory says {expected}")]
    SizeMismatch {
        name: String,
        expected: u64,
        found: u64,
    },

    #[error("checksum mismatch for entry {name}: expected {expected:08x}, found {found:08x}")]
    ChecksumMismatch {
        name: String,
        expected: u32,
        found: u32,
    },
}

pub type ArchiveResult<T> = Result<T, ArchiveError>;
