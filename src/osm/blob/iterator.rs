//! The blob iterator, splitting a byte stream into framed blobs.
//!
//! Each blob is preceded by a big-endian `u32` length and a `BlobHeader`
//! message declaring the size of the `Blob` that follows.

use bytes::Bytes;
use log::trace;
use prost::Message;
use std::io;
use std::io::Read;

use crate::error::CodecError;
use crate::osm::blob::item::BlobItem;
use crate::osm::model::{Blob, BlobHeader};

const HEADER_LEN_SIZE: usize = 4;

/// Largest `BlobHeader` permitted by the format.
pub const MAX_HEADER_SIZE: usize = 64 * 1024;

/// Largest `Blob` permitted by the format.
pub const MAX_BLOB_SIZE: usize = 32 * 1024 * 1024;

pub struct BlobIterator<R> {
    reader: R,
    index: u64,
    finished: bool,
}

impl<R: Read> BlobIterator<R> {
    pub fn new(reader: R) -> BlobIterator<R> {
        BlobIterator {
            reader,
            index: 0,
            finished: false,
        }
    }

    fn read_blob(&mut self) -> Result<Option<BlobItem>, CodecError> {
        let mut header_len_buffer = [0_u8; HEADER_LEN_SIZE];
        if !self.fill_or_eof(&mut header_len_buffer)? {
            return Ok(None);
        }

        // Translate to u32 (Big Endian)
        let header_len = u32::from_be_bytes(header_len_buffer) as usize;
        if header_len > MAX_HEADER_SIZE {
            return Err(CodecError::HeaderTooLarge(header_len));
        }

        let mut blob_header_buffer = vec![0_u8; header_len];
        self.reader.read_exact(&mut blob_header_buffer)?;
        let header = BlobHeader::decode(blob_header_buffer.as_slice())?;

        let data_size = usize::try_from(header.datasize)
            .map_err(|_| CodecError::InvalidBlobSize(header.datasize))?;
        if data_size > MAX_BLOB_SIZE {
            return Err(CodecError::BlobTooLarge(data_size));
        }

        let mut blob_buffer = vec![0_u8; data_size];
        self.reader.read_exact(&mut blob_buffer)?;
        let blob = Blob::decode(Bytes::from(blob_buffer))?;

        trace!(
            "Read blob {} of type {} ({} bytes)",
            self.index,
            header.r#type,
            data_size
        );

        let item = BlobItem::new(self.index, header, blob);
        self.index += 1;
        Ok(Some(item))
    }

    /// Fills the buffer, returning `false` on a clean end of stream
    /// before the first byte.
    fn fill_or_eof(&mut self, buffer: &mut [u8]) -> io::Result<bool> {
        let mut filled = 0;
        while filled < buffer.len() {
            match self.reader.read(&mut buffer[filled..]) {
                Ok(0) if filled == 0 => return Ok(false),
                Ok(0) => return Err(io::ErrorKind::UnexpectedEof.into()),
                Ok(read) => filled += read,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }

        Ok(true)
    }
}

impl<R: Read> Iterator for BlobIterator<R> {
    type Item = Result<BlobItem, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_blob() {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
