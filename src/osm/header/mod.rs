//! Decoding of the `OSMHeader` block.

use crate::osm::model::{HeaderBBox, HeaderBlock};
use crate::osm::primitive::Timestamp;

#[doc(hidden)]
mod test;

// REQUIRED FEATURES
pub const OSM_SCHEMA_V06: &str = "OsmSchema-V0.6";
pub const DENSE_NODES: &str = "DenseNodes";
pub const HISTORICAL_INFORMATION: &str = "HistoricalInformation";
pub const LOCATIONS_ON_WAYS: &str = "LocationsOnWays";

// OPTIONAL FEATURES
pub const HAS_METADATA: &str = "Has_Metadata";
pub const SORT_TYPE_THEN_ID: &str = "Sort.Type_then_ID";
pub const SORT_GEOGRAPHIC: &str = "Sort.Geographic";

/// Required features this decoder understands.
pub const SUPPORTED_FEATURES: [&str; 4] = [
    OSM_SCHEMA_V06,
    DENSE_NODES,
    HISTORICAL_INFORMATION,
    LOCATIONS_ON_WAYS,
];

/// Bounding box of the file, in nanodegrees as written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub left: i64,
    pub right: i64,
    pub top: i64,
    pub bottom: i64,
}

impl BoundingBox {
    const NANO: f64 = 1e9;

    pub fn min_lon(&self) -> f64 {
        self.left as f64 / Self::NANO
    }

    pub fn max_lon(&self) -> f64 {
        self.right as f64 / Self::NANO
    }

    pub fn max_lat(&self) -> f64 {
        self.top as f64 / Self::NANO
    }

    pub fn min_lat(&self) -> f64 {
        self.bottom as f64 / Self::NANO
    }

    /// The box as a `geo::Rect`, `x = longitude`, `y = latitude`.
    pub fn rect(&self) -> geo::Rect<f64> {
        geo::Rect::new(
            geo::coord! { x: self.min_lon(), y: self.min_lat() },
            geo::coord! { x: self.max_lon(), y: self.max_lat() },
        )
    }
}

impl From<&HeaderBBox> for BoundingBox {
    fn from(value: &HeaderBBox) -> Self {
        BoundingBox {
            left: value.left,
            right: value.right,
            top: value.top,
            bottom: value.bottom,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Replication {
    /// Seconds since the unix epoch.
    pub timestamp: Option<i64>,
    pub sequence_number: Option<i64>,
    pub base_url: Option<String>,
}

impl Replication {
    /// The replication timestamp as a [`Timestamp`].
    pub fn timestamp(&self) -> Option<Timestamp> {
        self.timestamp
            .map(|seconds| Timestamp(seconds.saturating_mul(1000)))
    }
}

/// The decoded file header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderRecord {
    pub bbox: Option<BoundingBox>,
    pub required_features: Vec<String>,
    pub optional_features: Vec<String>,
    pub writing_program: Option<String>,
    pub source: Option<String>,
    pub replication: Replication,
}

impl HeaderRecord {
    pub fn from_raw(header: HeaderBlock) -> Self {
        HeaderRecord {
            bbox: header.bbox.as_ref().map(BoundingBox::from),
            required_features: header.required_features,
            optional_features: header.optional_features,
            writing_program: header.writingprogram,
            source: header.source,
            replication: Replication {
                timestamp: header.osmosis_replication_timestamp,
                sequence_number: header.osmosis_replication_sequence_number,
                base_url: header.osmosis_replication_base_url,
            },
        }
    }

    /// Required features outside of [`SUPPORTED_FEATURES`].
    pub fn unsupported_features(&self) -> Vec<&str> {
        self.required_features
            .iter()
            .map(String::as_str)
            .filter(|feature| !SUPPORTED_FEATURES.contains(feature))
            .collect()
    }

    pub fn requires(&self, feature: &str) -> bool {
        self.required_features.iter().any(|f| f == feature)
    }

    pub fn offers(&self, feature: &str) -> bool {
        self.optional_features.iter().any(|f| f == feature)
    }
}
