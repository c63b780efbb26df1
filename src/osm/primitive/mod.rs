//! Decoding of `OSMData` blocks.
//!
//! Each block gets its own [`PrimitiveScope`] holding the string table and
//! scaling parameters. The scope is passed by reference to every element
//! decoder, so independent blocks can be decoded on separate threads.

pub mod context;
pub mod strings;

#[doc(hidden)]
mod test;

#[cfg(feature = "tracing")]
use tracing::debug;

#[doc(inline)]
pub use context::{BlockContext, Timestamp};
#[doc(inline)]
pub use strings::StringTable;

use crate::error::FormatError;
use crate::osm::element::Element;
use crate::osm::model::PrimitiveBlock;

/// Everything an element decoder needs from its owning block.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimitiveScope {
    pub strings: StringTable,
    pub context: BlockContext,
    /// Whether `Info`/`DenseInfo` are resolved into [`Meta`](crate::osm::element::Meta).
    pub metadata: bool,
}

impl PrimitiveScope {
    pub fn from_block(block: &PrimitiveBlock, metadata: bool) -> Self {
        #[cfg(feature = "tracing")]
        if block.lat_offset.is_some() || block.lon_offset.is_some() || block.granularity.is_some() {
            debug!(
                "BlockHasOffset! +Lon={:?}, +Lat={:?}, Granularity={:?}",
                block.lon_offset, block.lat_offset, block.granularity
            );
        }

        PrimitiveScope {
            strings: StringTable::from_raw(&block.stringtable),
            context: BlockContext::from_block(block),
            metadata,
        }
    }
}

/// Decodes every group of the block, in file order.
///
/// Nothing is returned unless the whole block decodes, so a corrupt group
/// never yields partially decoded elements.
pub fn decode(block: &PrimitiveBlock, metadata: bool) -> Result<Vec<Element>, FormatError> {
    let scope = PrimitiveScope::from_block(block, metadata);

    block
        .primitivegroup
        .iter()
        .try_fold(Vec::new(), |mut elements, group| {
            elements.extend(Element::from_group(group, &scope)?);
            Ok(elements)
        })
}
