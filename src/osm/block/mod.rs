//! The Block classifier, iterator and item definitions

pub mod item;
pub mod iterator;
pub mod kind;


#[doc(inline)]
pub use item::{BlockItem, RawBlock};
#[doc(inline)]
pub use iterator::BlockIterator;
#[doc(inline)]
pub use kind::BlockKind;
