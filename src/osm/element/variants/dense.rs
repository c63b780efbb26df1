//! Column decoding for `DenseNodes`.
//!
//! Every column is read in lockstep with the node ids. An empty column is
//! treated as absent, any other length must match the number of ids.

use either::Either;
use itertools::izip;
use std::iter;

use super::common::{Meta, Tags, ensure_len, undelta};
use crate::error::FormatError;
use crate::osm::model::DenseInfo;
use crate::osm::primitive::{PrimitiveScope, StringTable};

/// Reserved string index separating the tag sets of successive nodes.
const TAG_DELIMITER: i32 = 0;

fn column<I>(
    field: &'static str,
    values: I,
    count: usize,
) -> Result<impl Iterator<Item = Option<I::Item>>, FormatError>
where
    I: ExactSizeIterator,
{
    match values.len() {
        0 => Ok(Either::Right(iter::repeat_with(|| None).take(count))),
        found => {
            ensure_len(field, count, found)?;
            Ok(Either::Left(values.map(Some)))
        }
    }
}

/// Resolves one `Meta` per node from the columnar `DenseInfo`.
pub fn metadata(
    info: &DenseInfo,
    count: usize,
    scope: &PrimitiveScope,
) -> Result<Vec<Meta>, FormatError> {
    let versions = column("denseinfo.version", info.version.iter().copied(), count)?;
    let timestamps = column(
        "denseinfo.timestamp",
        undelta("denseinfo.timestamp", &info.timestamp)?.into_iter(),
        count,
    )?;
    let changesets = column(
        "denseinfo.changeset",
        undelta("denseinfo.changeset", &info.changeset)?.into_iter(),
        count,
    )?;
    let uids = column(
        "denseinfo.uid",
        undelta("denseinfo.uid", &info.uid)?.into_iter(),
        count,
    )?;
    let users = column(
        "denseinfo.user_sid",
        undelta("denseinfo.user_sid", &info.user_sid)?.into_iter(),
        count,
    )?;
    let visible = column("denseinfo.visible", info.visible.iter().copied(), count)?;

    izip!(versions, timestamps, changesets, uids, users, visible)
        .map(|(version, timestamp, changeset, uid, user, visible)| -> Result<Meta, FormatError> {
            Ok(Meta {
                version,
                timestamp: scope.context.decode_timestamp(timestamp)?,
                changeset,
                uid,
                user: user
                    .and_then(|sid| scope.strings.get(sid))
                    .map(str::to_owned),
                visible,
            })
        })
        .collect()
}

/// Splits the flat `keys_vals` stream into one tag set per node.
pub fn tags(keys_vals: &[i32], count: usize, strings: &StringTable) -> Result<Vec<Tags>, FormatError> {
    if keys_vals.is_empty() {
        return Ok(vec![Tags::default(); count]);
    }

    let sets = keys_vals.iter().filter(|&&i| i == TAG_DELIMITER).count();
    if keys_vals.last() != Some(&TAG_DELIMITER) {
        // The final node's tag set was never closed.
        return Err(FormatError::LengthMismatch {
            field: "keys_vals",
            expected: count,
            found: sets + 1,
        });
    }
    ensure_len("keys_vals", count, sets)?;

    keys_vals
        .split(|&i| i == TAG_DELIMITER)
        .take(count)
        .map(|set| {
            let pairs = set.chunks_exact(2);
            if !pairs.remainder().is_empty() {
                return Err(FormatError::KeyWithoutValue);
            }

            Tags::resolve(
                pairs.map(|pair| (i64::from(pair[0]), i64::from(pair[1]))),
                strings,
            )
        })
        .collect()
}
