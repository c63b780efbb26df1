//! Scaling parameters of a `PrimitiveBlock`, and the pure conversions
//! from raw integer fields into coordinates and timestamps.

use chrono::{DateTime, Utc};
use geo::{Point, point};

use crate::error::FormatError;
use crate::osm::model::PrimitiveBlock;

/// Nanodegrees per degree.
const NANO: f64 = 1e9;

/// Scaling parameters of a single block.
///
/// Built fresh for every block, so decoding two blocks never shares state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockContext {
    /// Nanodegrees per coordinate unit.
    pub granularity: i64,
    pub lat_offset: i64,
    pub lon_offset: i64,
    /// Milliseconds per timestamp unit.
    pub date_granularity: i64,
}

impl Default for BlockContext {
    fn default() -> Self {
        BlockContext {
            granularity: 100,
            lat_offset: 0,
            lon_offset: 0,
            date_granularity: 1000,
        }
    }
}

impl BlockContext {
    pub fn from_block(block: &PrimitiveBlock) -> Self {
        BlockContext {
            granularity: block.granularity() as i64,
            lat_offset: block.lat_offset(),
            lon_offset: block.lon_offset(),
            date_granularity: block.date_granularity() as i64,
        }
    }

    /// Scales a raw value into nanodegrees, failing instead of wrapping
    /// when the product leaves the `i64` range.
    #[inline]
    fn scale(&self, field: &'static str, raw: i64, offset: i64) -> Result<i64, FormatError> {
        self.granularity
            .checked_mul(raw)
            .and_then(|nano| nano.checked_add(offset))
            .ok_or(FormatError::Overflow { field, raw })
    }

    #[inline]
    pub fn decode_latitude(&self, raw: i64) -> Result<f64, FormatError> {
        Ok(self.scale("lat", raw, self.lat_offset)? as f64 / NANO)
    }

    #[inline]
    pub fn decode_longitude(&self, raw: i64) -> Result<f64, FormatError> {
        Ok(self.scale("lon", raw, self.lon_offset)? as f64 / NANO)
    }

    /// A position as `x = longitude`, `y = latitude`.
    #[inline]
    pub fn decode_point(&self, raw_lat: i64, raw_lon: i64) -> Result<Point, FormatError> {
        Ok(point! { x: self.decode_longitude(raw_lon)?, y: self.decode_latitude(raw_lat)? })
    }

    #[inline]
    pub fn decode_timestamp(&self, raw: Option<i64>) -> Result<Option<Timestamp>, FormatError> {
        raw.map(|units| {
            self.date_granularity
                .checked_mul(units)
                .map(Timestamp)
                .ok_or(FormatError::Overflow {
                    field: "timestamp",
                    raw: units,
                })
        })
        .transpose()
    }
}

/// Milliseconds since the unix epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    #[inline]
    pub const fn millis(&self) -> i64 {
        self.0
    }

    /// `None` when the instant is outside of what `chrono` can represent.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}
