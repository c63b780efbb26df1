#![cfg(test)]

use prost::Message;

use crate::error::FormatError;
use crate::osm::decoder::{DecodeOptions, Decoder};
use crate::osm::header::*;
use crate::osm::model::{HeaderBBox, HeaderBlock};

fn bbox() -> HeaderBBox {
    HeaderBBox {
        left: -77_119_759_000,
        right: -76_909_393_000,
        top: 38_995_548_000,
        bottom: 38_791_645_000,
    }
}

#[test]
fn header_with_bbox_and_no_features() {
    let bytes = HeaderBlock {
        bbox: Some(bbox()),
        ..HeaderBlock::default()
    }
    .encode_to_vec();

    let header = Decoder::default().decode_header(&bytes).expect("header decodes");

    assert!(header.required_features.is_empty());
    assert!(header.optional_features.is_empty());
    assert_eq!(header.bbox, Some(BoundingBox {
        left: -77_119_759_000,
        right: -76_909_393_000,
        top: 38_995_548_000,
        bottom: 38_791_645_000,
    }));
    assert!(header.unsupported_features().is_empty());
}

#[test]
fn bounding_box_in_degrees() {
    let bbox = BoundingBox::from(&bbox());

    assert_eq!(bbox.min_lon(), -77.119759);
    assert_eq!(bbox.max_lon(), -76.909393);
    assert_eq!(bbox.max_lat(), 38.995548);
    assert_eq!(bbox.min_lat(), 38.791645);
    assert_eq!(bbox.rect().min().x, -77.119759);
    assert_eq!(bbox.rect().max().y, 38.995548);
}

#[test]
fn header_exposes_writer_and_replication() {
    let raw = HeaderBlock {
        required_features: vec![OSM_SCHEMA_V06.into(), DENSE_NODES.into()],
        optional_features: vec![SORT_TYPE_THEN_ID.into()],
        writingprogram: Some("osmium/1.16.0".into()),
        source: Some("https://www.openstreetmap.org/api/0.6".into()),
        osmosis_replication_timestamp: Some(1_700_000_000),
        osmosis_replication_sequence_number: Some(4_021),
        osmosis_replication_base_url: Some("https://planet.openstreetmap.org/replication/minute".into()),
        ..HeaderBlock::default()
    };

    let header = HeaderRecord::from_raw(raw);

    assert_eq!(header.bbox, None);
    assert!(header.requires(DENSE_NODES));
    assert!(!header.requires(HISTORICAL_INFORMATION));
    assert!(header.offers(SORT_TYPE_THEN_ID));
    assert_eq!(header.writing_program.as_deref(), Some("osmium/1.16.0"));
    assert_eq!(header.replication.sequence_number, Some(4_021));
    assert_eq!(
        header.replication.timestamp().map(|t| t.millis()),
        Some(1_700_000_000_000)
    );
}

#[test_log::test]
fn unsupported_features_warn_by_default() {
    let bytes = HeaderBlock {
        required_features: vec![DENSE_NODES.into(), "Sort.Magic".into()],
        ..HeaderBlock::default()
    }
    .encode_to_vec();

    let header = Decoder::default().decode_header(&bytes).expect("header decodes");
    assert_eq!(header.unsupported_features(), vec!["Sort.Magic"]);
}

#[test]
fn unsupported_features_rejected_when_strict() {
    let bytes = HeaderBlock {
        required_features: vec![DENSE_NODES.into(), "Sort.Magic".into()],
        ..HeaderBlock::default()
    }
    .encode_to_vec();

    let decoder = Decoder::new(DecodeOptions::default().strict_features(true));
    match decoder.decode_header(&bytes) {
        Err(FormatError::UnsupportedFeatures(features)) => {
            assert_eq!(features, vec!["Sort.Magic".to_string()])
        }
        other => panic!("expected unsupported features, got {other:?}"),
    }
}

#[test]
fn malformed_header_is_a_format_error() {
    // Field 1 declared as a 16 byte message with only two bytes present.
    let bytes = vec![0x0a, 0x10, 0x08, 0x01];

    assert!(matches!(
        Decoder::default().decode_header(&bytes),
        Err(FormatError::Decode(_))
    ));
}
