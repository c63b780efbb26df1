//! The block-handling entry point.

use log::{debug, trace, warn};
use prost::Message;

use crate::error::FormatError;
use crate::osm::block::{BlockItem, BlockKind, RawBlock};
use crate::osm::element::Element;
use crate::osm::header::HeaderRecord;
use crate::osm::model::{HeaderBlock, PrimitiveBlock};
use crate::osm::primitive;
use crate::osm::sink::EntitySink;

/// Settings applied to every block a [`Decoder`] handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject headers requiring features outside of
    /// [`SUPPORTED_FEATURES`](crate::osm::header::SUPPORTED_FEATURES).
    pub strict_features: bool,
    /// Resolve `Info` and `DenseInfo` into element metadata.
    pub metadata: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            strict_features: false,
            metadata: true,
        }
    }
}

impl DecodeOptions {
    pub fn strict_features(mut self, strict: bool) -> Self {
        self.strict_features = strict;
        self
    }

    pub fn metadata(mut self, metadata: bool) -> Self {
        self.metadata = metadata;
        self
    }
}

/// The fully decoded content of one block, ready for delivery.
#[derive(Clone, Debug, PartialEq)]
pub enum BlockOutput {
    Header(HeaderRecord),
    Elements(Vec<Element>),
    Skipped(String),
}

impl BlockOutput {
    pub fn deliver<S: EntitySink + ?Sized>(self, sink: &mut S) {
        match self {
            BlockOutput::Header(header) => sink.header(header),
            BlockOutput::Elements(elements) => {
                for element in elements {
                    element.deliver(sink);
                }
            }
            BlockOutput::Skipped(label) => sink.skipped_block(&label),
        }
    }
}

/// Decodes header and data blocks and hands the results to a sink.
///
/// Holds no per-block state, so a single decoder may be shared between
/// threads decoding independent blocks.
#[derive(Clone, Copy, Debug, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new(options: DecodeOptions) -> Self {
        Decoder { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Whether a block with the given type label should be skipped.
    #[inline]
    pub fn skip_block(&self, label: &str) -> bool {
        BlockKind::should_skip(label)
    }

    /// Decodes a block and delivers its content to the sink.
    ///
    /// Nothing reaches the sink if the block fails to decode.
    pub fn handle_block<S: EntitySink + ?Sized>(
        &self,
        block: &RawBlock,
        sink: &mut S,
    ) -> Result<(), FormatError> {
        self.decode_block(block)?.deliver(sink);
        Ok(())
    }

    /// Decodes a block without delivering it.
    pub fn decode_block(&self, block: &RawBlock) -> Result<BlockOutput, FormatError> {
        if self.skip_block(&block.label) {
            return Ok(BlockOutput::Skipped(block.label.clone()));
        }

        let Some(kind) = block.kind() else {
            return Ok(BlockOutput::Skipped(block.label.clone()));
        };

        let item = BlockItem::decode(kind, block.data.clone())?;
        trace!("Decoding {} from {} block", item.r#type(), block.label);

        match item {
            BlockItem::HeaderBlock(header) => self.header(header).map(BlockOutput::Header),
            BlockItem::PrimitiveBlock(primitive) => {
                self.primitive(&primitive).map(BlockOutput::Elements)
            }
        }
    }

    /// Decodes the bytes of an `OSMHeader` block.
    pub fn decode_header(&self, data: &[u8]) -> Result<HeaderRecord, FormatError> {
        self.header(HeaderBlock::decode(data)?)
    }

    /// Decodes the bytes of an `OSMData` block.
    pub fn decode_primitive(&self, data: &[u8]) -> Result<Vec<Element>, FormatError> {
        self.primitive(&PrimitiveBlock::decode(data)?)
    }

    fn header(&self, header: HeaderBlock) -> Result<HeaderRecord, FormatError> {
        let record = HeaderRecord::from_raw(header);
        let unsupported = record.unsupported_features();

        if !unsupported.is_empty() {
            if self.options.strict_features {
                return Err(FormatError::UnsupportedFeatures(
                    unsupported.into_iter().map(str::to_owned).collect(),
                ));
            }

            for feature in unsupported {
                warn!("Header requires unsupported feature: {feature}");
            }
        }

        Ok(record)
    }

    fn primitive(&self, block: &PrimitiveBlock) -> Result<Vec<Element>, FormatError> {
        let elements = primitive::decode(block, self.options.metadata)?;
        debug!(
            "Decoded {} elements from {} groups",
            elements.len(),
            block.primitivegroup.len()
        );

        Ok(elements)
    }
}
