//! Describes the `BlobItem`, a framed blob with its header, and the
//! inflation of its payload into a [`RawBlock`].

use bytes::{Buf, Bytes};
use flate2::read::ZlibDecoder;
use log::trace;
use std::io;
use std::io::Read;

use crate::error::CodecError;
use crate::osm::blob::iterator::MAX_BLOB_SIZE;
use crate::osm::block::{BlockKind, RawBlock};
use crate::osm::model::{Blob, BlobHeader, blob::Data};

pub struct BlobItem {
    /// Position of the blob within the stream, starting at zero.
    pub index: u64,
    pub header: BlobHeader,
    pub blob: Blob,
}

impl BlobItem {
    #[inline]
    pub(crate) fn new(index: u64, header: BlobHeader, blob: Blob) -> BlobItem {
        BlobItem {
            index,
            header,
            blob,
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.header.r#type
    }

    /// Inflates the payload. Blocks of an unknown type are passed along
    /// with an empty payload, as nothing will decode them.
    pub fn into_block(self) -> Result<RawBlock, CodecError> {
        let BlobItem { header, blob, .. } = self;

        if BlockKind::classify(&header.r#type).is_none() {
            return Ok(RawBlock::new(header.r#type, Bytes::new()));
        }

        let data = BlobItem::inflate(blob)?;
        Ok(RawBlock::new(header.r#type, data))
    }

    fn inflate(blob: Blob) -> Result<Bytes, CodecError> {
        let raw_size = blob.raw_size.and_then(|size| usize::try_from(size).ok());

        match blob.data {
            Some(Data::Raw(data)) => Ok(data),
            Some(Data::ZlibData(data)) => BlobItem::zlib_decode(data, raw_size).map(Bytes::from),
            Some(Data::LzmaData(_)) => Err(CodecError::UnsupportedCompression("lzma")),
            Some(Data::ObsoleteBzip2Data(_)) => Err(CodecError::UnsupportedCompression("bzip2")),
            Some(Data::Lz4Data(_)) => Err(CodecError::UnsupportedCompression("lz4")),
            Some(Data::ZstdData(_)) => Err(CodecError::UnsupportedCompression("zstd")),
            None => {
                trace!("Blob carries no payload");
                Ok(Bytes::new())
            }
        }
    }

    /// Inflates a zlib payload, never producing more than
    /// [`MAX_BLOB_SIZE`] bytes whatever the blob declares.
    fn zlib_decode(data: Bytes, raw_size: Option<usize>) -> Result<Vec<u8>, CodecError> {
        if let Some(declared) = raw_size.filter(|&size| size > MAX_BLOB_SIZE) {
            return Err(CodecError::BlobTooLarge(declared));
        }

        let mut decoded = Vec::with_capacity(raw_size.unwrap_or(data.len()));
        ZlibDecoder::new(data.reader())
            .take(MAX_BLOB_SIZE as u64 + 1)
            .read_to_end(&mut decoded)
            .map_err(CodecError::Decompress)?;

        if decoded.len() > MAX_BLOB_SIZE {
            return Err(CodecError::BlobTooLarge(decoded.len()));
        }

        match raw_size {
            Some(expected) if expected != decoded.len() => Err(CodecError::Decompress(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("inflated {} bytes, header declared {expected}", decoded.len()),
            ))),
            _ => Ok(decoded),
        }
    }
}
