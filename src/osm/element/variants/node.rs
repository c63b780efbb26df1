//! Describes a decoded `osm::Node`, with its position restored from
//! the block's granularity and offsets.

use geo::Point;
use itertools::izip;

use super::common::{Meta, Tags, ensure_len, undelta};
use super::dense;
use crate::error::FormatError;
use crate::osm::model;
use crate::osm::primitive::PrimitiveScope;

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: i64,
    /// `x = longitude`, `y = latitude`, in degrees.
    pub position: Point,
    pub tags: Tags,
    pub meta: Option<Meta>,
}

impl Node {
    pub fn id(&self) -> i64 {
        self.id
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.position.y()
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.position.x()
    }

    #[inline]
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn from_raw(value: &model::Node, scope: &PrimitiveScope) -> Result<Self, FormatError> {
        Ok(Node {
            id: value.id,
            position: scope.context.decode_point(value.lat, value.lon)?,
            tags: Tags::from_parallel(&value.keys, &value.vals, &scope.strings)?,
            meta: Meta::resolve(value.info.as_ref(), scope)?,
        })
    }

    /// Takes an `osm::DenseNodes` structure and extracts every `Node` from
    /// it, accumulating the delta-coded ids and coordinates in order.
    ///
    /// ```rust,ignore
    /// let scope = PrimitiveScope::from_block(&block, true);
    /// if let Some(dense) = &group.dense {
    ///     for node in Node::from_dense(dense, &scope)? {
    ///         println!("Node: {}", node.id);
    ///     }
    /// }
    /// ```
    pub fn from_dense(value: &model::DenseNodes, scope: &PrimitiveScope) -> Result<Vec<Self>, FormatError> {
        let count = value.id.len();
        ensure_len("lat", count, value.lat.len())?;
        ensure_len("lon", count, value.lon.len())?;

        let tags = dense::tags(&value.keys_vals, count, &scope.strings)?;
        let metas: Vec<Option<Meta>> = match value.denseinfo.as_ref().filter(|_| scope.metadata) {
            Some(info) => dense::metadata(info, count, scope)?.into_iter().map(Some).collect(),
            None => vec![None; count],
        };

        let ids = undelta("id", &value.id)?;
        let lats = undelta("lat", &value.lat)?;
        let lons = undelta("lon", &value.lon)?;

        izip!(ids, lats, lons, tags, metas)
            .map(|(id, lat, lon, tags, meta)| -> Result<Node, FormatError> {
                Ok(Node {
                    id,
                    position: scope.context.decode_point(lat, lon)?,
                    tags,
                    meta,
                })
            })
            .collect()
    }
}
