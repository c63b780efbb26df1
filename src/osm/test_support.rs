#![cfg(test)]
//! Builders for in-memory blocks and framed streams.

use bytes::Bytes;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use prost::Message;
use std::io::Write;

use crate::osm::model::{self, Blob, BlobHeader, PrimitiveBlock, PrimitiveGroup, blob::Data};

/// A string table with the reserved empty entry at index `0`.
pub(crate) fn string_table(values: &[&str]) -> model::StringTable {
    model::StringTable {
        s: std::iter::once("")
            .chain(values.iter().copied())
            .map(|s| Bytes::copy_from_slice(s.as_bytes()))
            .collect(),
    }
}

pub(crate) fn primitive_block(strings: &[&str], groups: Vec<PrimitiveGroup>) -> PrimitiveBlock {
    PrimitiveBlock {
        stringtable: string_table(strings),
        primitivegroup: groups,
        ..PrimitiveBlock::default()
    }
}

/// Delta-codes absolute values, the inverse of the running sum.
pub(crate) fn delta(values: &[i64]) -> Vec<i64> {
    values
        .iter()
        .scan(0i64, |prior, &value| {
            let delta = value - *prior;
            *prior = value;
            Some(delta)
        })
        .collect()
}

pub(crate) fn dense_group(ids: &[i64], lats: &[i64], lons: &[i64]) -> PrimitiveGroup {
    PrimitiveGroup {
        dense: Some(model::DenseNodes {
            id: delta(ids),
            lat: delta(lats),
            lon: delta(lons),
            ..model::DenseNodes::default()
        }),
        ..PrimitiveGroup::default()
    }
}

pub(crate) fn zlib(payload: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(payload).expect("in-memory write");
    encoder.finish().expect("in-memory finish")
}

/// Frames a payload as `length | BlobHeader | Blob`.
pub(crate) fn frame(label: &str, payload: &[u8], compress: bool) -> Vec<u8> {
    let data = if compress {
        Data::ZlibData(Bytes::from(zlib(payload)))
    } else {
        Data::Raw(Bytes::copy_from_slice(payload))
    };

    frame_blob(
        label,
        Blob {
            raw_size: Some(payload.len() as i32),
            data: Some(data),
        },
    )
}

pub(crate) fn frame_blob(label: &str, blob: Blob) -> Vec<u8> {
    let blob = blob.encode_to_vec();
    let header = BlobHeader {
        r#type: label.to_string(),
        indexdata: None,
        datasize: blob.len() as i32,
    }
    .encode_to_vec();

    let mut framed = (header.len() as u32).to_be_bytes().to_vec();
    framed.extend(header);
    framed.extend(blob);
    framed
}
