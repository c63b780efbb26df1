//! Iterates over `RawBlock`s in a stream

use std::fs::File;
use std::io;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::CodecError;
use crate::osm::blob::item::BlobItem;
use crate::osm::blob::iterator::BlobIterator;
use crate::osm::block::item::RawBlock;

pub struct BlockIterator<R> {
    blobs: BlobIterator<R>,
}

impl BlockIterator<BufReader<File>> {
    #[inline]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        let file = File::open(path)?;
        Ok(BlockIterator::new(BufReader::new(file)))
    }
}

impl<R: Read> BlockIterator<R> {
    #[inline]
    pub fn new(reader: R) -> BlockIterator<R> {
        BlockIterator {
            blobs: BlobIterator::new(reader),
        }
    }
}

impl<R: Read> Iterator for BlockIterator<R> {
    type Item = Result<RawBlock, CodecError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.blobs
            .next()
            .map(|blob| blob.and_then(BlobItem::into_block))
    }
}
