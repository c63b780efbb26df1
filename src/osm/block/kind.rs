//! Classification of blocks by their declared type label.

use log::info;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString};

/// The block types this decoder understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumString, Display, AsRefStr)]
pub enum BlockKind {
    #[strum(serialize = "OSMHeader")]
    Header,
    #[strum(serialize = "OSMData")]
    Data,
}

impl BlockKind {
    /// `None` for any label other than `OSMHeader` and `OSMData`.
    #[inline]
    pub fn classify(label: &str) -> Option<BlockKind> {
        BlockKind::from_str(label).ok()
    }

    /// Unknown labels are skipped, never rejected, so files carrying
    /// extension blocks still decode. Each skip is logged.
    pub fn should_skip(label: &str) -> bool {
        match BlockKind::classify(label) {
            Some(_) => false,
            None => {
                info!("Skipped block of type: {label}");
                true
            }
        }
    }
}
