//! Describes the decoded `Way` structure.

use geo::Point;
use itertools::izip;

use super::common::{Meta, Tags, ensure_len, undelta};
use crate::error::FormatError;
use crate::osm::model;
use crate::osm::primitive::PrimitiveScope;

#[derive(Clone, Debug, PartialEq)]
pub struct Way {
    pub id: i64,
    /// Node ids, in the order the way visits them.
    pub refs: Vec<i64>,
    pub tags: Tags,
    pub meta: Option<Meta>,
    /// Positions of each referenced node, written by producers that
    /// advertise the `LocationsOnWays` feature.
    pub locations: Option<Vec<Point>>,
}

impl Way {
    pub fn id(&self) -> i64 {
        self.id
    }

    #[inline]
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    #[inline]
    pub fn refs(&self) -> &[i64] {
        &self.refs
    }

    pub fn from_raw(value: &model::Way, scope: &PrimitiveScope) -> Result<Self, FormatError> {
        let refs = undelta("refs", &value.refs)?;

        let locations = if value.lat.is_empty() && value.lon.is_empty() {
            None
        } else {
            ensure_len("way.lat", refs.len(), value.lat.len())?;
            ensure_len("way.lon", refs.len(), value.lon.len())?;

            Some(
                izip!(undelta("way.lat", &value.lat)?, undelta("way.lon", &value.lon)?)
                    .map(|(lat, lon)| scope.context.decode_point(lat, lon))
                    .collect::<Result<Vec<_>, _>>()?,
            )
        };

        Ok(Way {
            id: value.id,
            refs,
            tags: Tags::from_parallel(&value.keys, &value.vals, &scope.strings)?,
            meta: Meta::resolve(value.info.as_ref(), scope)?,
            locations,
        })
    }
}
