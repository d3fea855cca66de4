use crate::artifacts::archive::zip::error::{ArchiveError, ArchiveResult};
use std::io::Read;

/// Upper bound for the up-front allocation of an inflated entry
const MAX_PREALLOCATION: u64 = 64 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Store,
    Deflate,
    Unknown(u16),
}

impl From<u16> for CompressionMethod {
    fn from(value: u16) -> Self {
        match value {
            0 => CompressionMethod::Store,
            8 => CompressionMethod::Deflate,
            other => CompressionMethod::Unknown(other),
        }
    }
}

impl CompressionMethod {
    /// Decode the stored bytes of `name` into its uncompressed content
    pub fn decode(&self, name: &str, data: Vec<u8>, expected_size: u64) -> ArchiveResult<Vec<u8>> {
        match self {
            CompressionMethod::Store => Ok(data),
            CompressionMethod::Deflate => {
                let mut decoder = flate2::read::DeflateDecoder::new(data.as_slice());
                let mut content = Vec::with_capacity(expected_size.min(MAX_PREALLOCATION) as usize);
                decoder.read_to_end(&mut content)?;
                Ok(content)
            }
            CompressionMethod::Unknown(method) => Err(ArchiveError::UnsupportedCompression {
                name: name.to_string(),
                method: *method,
            }),
        }
    }
}
