//! A block item, holding the inflated payload of a blob and decoding
//! it into a header or primitive message.

use bytes::Bytes;
use prost::Message;

use crate::error::FormatError;
use crate::osm::block::kind::BlockKind;
use crate::osm::model::{HeaderBlock, PrimitiveBlock};

/// A typed, uncompressed block payload as read off the stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawBlock {
    pub label: String,
    pub data: Bytes,
}

impl RawBlock {
    pub fn new(label: impl Into<String>, data: impl Into<Bytes>) -> Self {
        RawBlock {
            label: label.into(),
            data: data.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> Option<BlockKind> {
        BlockKind::classify(&self.label)
    }
}

pub enum BlockItem {
    HeaderBlock(HeaderBlock),
    PrimitiveBlock(PrimitiveBlock),
}

impl BlockItem {
    /// Decodes the protobuf envelope of a block of the given kind.
    pub fn decode(kind: BlockKind, data: Bytes) -> Result<Self, FormatError> {
        Ok(match kind {
            BlockKind::Header => BlockItem::HeaderBlock(HeaderBlock::decode(data)?),
            BlockKind::Data => BlockItem::PrimitiveBlock(PrimitiveBlock::decode(data)?),
        })
    }

    pub fn r#type(&self) -> &str {
        match self {
            BlockItem::HeaderBlock(_) => "HeaderBlock",
            BlockItem::PrimitiveBlock(_) => "PrimitiveBlock",
        }
    }
}
