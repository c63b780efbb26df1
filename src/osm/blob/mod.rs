//! The Blob iterator and item definitions

pub mod item;
pub mod iterator;

#[doc(inline)]
pub use item::BlobItem;
#[doc(inline)]
pub use iterator::BlobIterator;
