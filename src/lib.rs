#![doc = include_str!("../docs/pbf.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod error;
pub mod osm;

pub use error::{CodecError, FormatError};
pub use osm::decoder::{DecodeOptions, Decoder};
pub use osm::sink::{Collector, EntitySink};
