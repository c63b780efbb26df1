//! Decoding of `.osm.pbf` streams.
//!
//! The [`decoder`] is the entry point for single blocks, [`reader`] drives
//! whole streams, and decoded entities are handed to an [`EntitySink`].

// Exposed modules
pub mod blob;
pub mod block;
pub mod decoder;
pub mod element;
pub mod header;
pub mod primitive;
pub mod reader;
pub mod sink;

#[doc(hidden)]
mod test_support;

// Inlined structs
#[doc(inline)]
pub use blob::BlobIterator;
#[doc(inline)]
pub use block::{BlockIterator, BlockKind, RawBlock};
#[doc(inline)]
pub use decoder::{BlockOutput, DecodeOptions, Decoder};
#[doc(inline)]
pub use element::{Element, Member, Meta, Node, Relation, Tags, Way};
#[doc(inline)]
pub use header::{BoundingBox, HeaderRecord};
#[doc(inline)]
pub use primitive::{BlockContext, PrimitiveScope, StringTable, Timestamp};
#[doc(inline)]
pub use reader::{par_read_all, read_all};
#[doc(inline)]
pub use sink::{Collector, EntitySink};

// Protocol Buffer Definitions
pub mod model;

#[doc(hidden)]
pub use model::relation::MemberType;
