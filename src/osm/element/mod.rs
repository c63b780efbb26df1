//! Decoded elements, and the routing of primitive groups into them.

pub mod item;

#[doc(hidden)]
pub mod variants;

#[doc(inline)]
pub use item::Element;
#[doc(inline)]
pub use variants::{Member, Node, Relation, Way};

pub use variants::common::*;
