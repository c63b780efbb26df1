//! Framed `.osm.pbf` streams assembled in memory.

use aaru_pbf::osm::model::{self, Blob, BlobHeader, blob::Data};
use bytes::Bytes;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use prost::Message;
use std::io::Write;

pub fn string_table(values: &[&str]) -> model::StringTable {
    model::StringTable {
        s: std::iter::once("")
            .chain(values.iter().copied())
            .map(|s| Bytes::copy_from_slice(s.as_bytes()))
            .collect(),
    }
}

pub fn delta(values: &[i64]) -> Vec<i64> {
    let mut prior = 0;
    values
        .iter()
        .map(|&value| {
            let delta = value - prior;
            prior = value;
            delta
        })
        .collect()
}

/// Frames a payload as `length | BlobHeader | Blob`.
pub fn frame(label: &str, payload: &[u8], compress: bool) -> Vec<u8> {
    let data = if compress {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(payload).expect("in-memory write");
        Data::ZlibData(Bytes::from(encoder.finish().expect("in-memory finish")))
    } else {
        Data::Raw(Bytes::copy_from_slice(payload))
    };

    let blob = Blob {
        raw_size: Some(payload.len() as i32),
        data: Some(data),
    }
    .encode_to_vec();

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
