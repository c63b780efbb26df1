#![cfg(test)]

use approx::assert_relative_eq;

use crate::error::FormatError;
use crate::osm::element::Element;
use crate::osm::model::{self, PrimitiveBlock, PrimitiveGroup};
use crate::osm::primitive::{self, BlockContext, PrimitiveScope, StringTable, Timestamp};
use crate::osm::test_support::{delta, dense_group, primitive_block, string_table};

fn context(granularity: i64, lat_offset: i64, lon_offset: i64) -> BlockContext {
    BlockContext {
        granularity,
        lat_offset,
        lon_offset,
        ..BlockContext::default()
    }
}

#[test]
fn coordinates_follow_granularity_and_offset() {
    let ctx = context(100, 1_000, -2_000);

    for raw in [-900_000_000i64, -1, 0, 1, 123_456_789, 900_000_000] {
        assert_eq!(ctx.decode_latitude(raw).ok(), Some((100 * raw + 1_000) as f64 / 1e9));
        assert_eq!(ctx.decode_longitude(raw).ok(), Some((100 * raw - 2_000) as f64 / 1e9));
    }
}

#[test]
fn coordinates_are_linear_in_raw() {
    let ctx = context(1_000, 0, 0);
    let lat = |raw: i64| ctx.decode_latitude(raw).expect("in range");
    let step = lat(1) - lat(0);

    for raw in [10i64, 1_000, 45_000_000] {
        assert_relative_eq!(lat(raw), step * raw as f64, max_relative = 1e-12);
    }
}

#[test]
fn coordinates_survive_encoding() {
    let ctx = context(100, 50_000_000, -70_000_000);
    let original: [(f64, f64); 3] = [(51.507_351_2, -0.127_758_3), (-33.868_82, 151.209_29), (0.0, 0.0)];

    for (lat, lon) in original {
        let raw_lat = ((lat * 1e9).round() as i64 - ctx.lat_offset) / ctx.granularity;
        let raw_lon = ((lon * 1e9).round() as i64 - ctx.lon_offset) / ctx.granularity;

        let point = ctx.decode_point(raw_lat, raw_lon).expect("in range");
        assert_relative_eq!(point.y(), lat, epsilon = 1e-7);
        assert_relative_eq!(point.x(), lon, epsilon = 1e-7);
    }
}

#[test]
fn timestamp_scales_by_date_granularity() {
    let ctx = BlockContext::default();

    assert_eq!(ctx.decode_timestamp(Some(1_700_000_000)).ok(), Some(Some(Timestamp(1_700_000_000_000))));
    assert_eq!(ctx.decode_timestamp(None).ok(), Some(None));

    let seconds = ctx
        .decode_timestamp(Some(86_400))
        .expect("in range")
        .and_then(|t| t.to_datetime())
        .map(|dt| dt.timestamp());
    assert_eq!(seconds, Some(86_400));
}

#[test]
fn timestamp_zero_is_not_absent() {
    let ctx = BlockContext {
        date_granularity: 1,
        ..BlockContext::default()
    };

    assert_eq!(ctx.decode_timestamp(Some(0)).ok(), Some(Some(Timestamp(0))));
    assert_eq!(ctx.decode_timestamp(Some(-1)).ok(), Some(Some(Timestamp(-1))));
}

#[test]
fn scaling_overflow_is_an_error() {
    let ctx = BlockContext::default();

    assert!(matches!(
        ctx.decode_latitude(i64::MAX / 10),
        Err(FormatError::Overflow { field: "lat", .. })
    ));
    assert!(matches!(
        ctx.decode_longitude(i64::MIN / 10),
        Err(FormatError::Overflow { field: "lon", .. })
    ));
    assert!(matches!(
        ctx.decode_timestamp(Some(i64::MAX / 100)),
        Err(FormatError::Overflow { field: "timestamp", .. })
    ));

    // The product fits, the offset pushes it out of range.
    let shifted = context(1, i64::MAX, 0);
    assert!(shifted.decode_latitude(1).is_err());
    assert!(shifted.decode_latitude(-1).is_ok());
}

#[test]
fn context_defaults_when_block_omits_parameters() {
    let block = PrimitiveBlock::default();
    assert_eq!(BlockContext::from_block(&block), BlockContext::default());

    let block = PrimitiveBlock {
        granularity: Some(1_000),
        lat_offset: Some(7),
        lon_offset: Some(-7),
        date_granularity: Some(1),
        ..PrimitiveBlock::default()
    };
    assert_eq!(BlockContext::from_block(&block), BlockContext {
        granularity: 1_000,
        lat_offset: 7,
        lon_offset: -7,
        date_granularity: 1,
    });
}

#[test]
fn string_table_never_resolves_reserved_or_out_of_range() {
    let table = StringTable::from_raw(&string_table(&["highway", "primary"]));

    assert_eq!(table.len(), 3);
    assert_eq!(table.get(0), None);
    assert_eq!(table.get(1), Some("highway"));
    assert_eq!(table.get(2), Some("primary"));
    assert_eq!(table.get(3), None);
    assert_eq!(table.get(-1), None);
    assert_eq!(table.get(i64::MAX), None);
    assert!(table.require(3).is_err());
}

#[test]
fn string_table_replaces_invalid_utf8() {
    let raw = model::StringTable {
        s: vec![bytes::Bytes::new(), bytes::Bytes::from_static(b"caf\xff")],
    };

    assert_eq!(StringTable::from_raw(&raw).get(1), Some("caf\u{fffd}"));
}

#[test]
fn dense_node_decodes_to_degrees() {
    let block = PrimitiveBlock {
        granularity: Some(100),
        lat_offset: Some(0),
        lon_offset: Some(0),
        ..primitive_block(&[], vec![dense_group(&[5], &[600_000_000], &[300_000_000])])
    };

    let elements = primitive::decode(&block, true).expect("block decodes");
    assert_eq!(elements.len(), 1);

    let Element::Node(node) = &elements[0] else {
        panic!("expected a node, got {:?}", elements[0]);
    };
    assert_eq!(node.id, 5);
    assert_eq!(node.lat(), 60.0);
    assert_eq!(node.lon(), 30.0);
    assert!(node.tags.is_empty());
    assert_eq!(node.meta, None);
}

#[test]
fn each_block_uses_its_own_context() {
    let group = || dense_group(&[1], &[10_000_000], &[10_000_000]);

    let coarse = PrimitiveBlock {
        granularity: Some(1_000),
        ..primitive_block(&[], vec![group()])
    };
    let shifted = PrimitiveBlock {
        lat_offset: Some(1_000_000_000),
        ..primitive_block(&[], vec![group()])
    };

    let lat = |block: &PrimitiveBlock| match primitive::decode(block, true).expect("decodes").remove(0) {
        Element::Node(node) => node.lat(),
        other => panic!("expected a node, got {other:?}"),
    };

    assert_eq!(lat(&coarse), 10.0);
    assert_eq!(lat(&shifted), 2.0);
    assert_eq!(lat(&coarse), 10.0);
}

#[test]
fn groups_and_variants_keep_file_order() {
    let plain = PrimitiveGroup {
        nodes: vec![model::Node {
            id: 1,
            lat: 0,
            lon: 0,
            ..model::Node::default()
        }],
        ways: vec![model::Way {
            id: 2,
            refs: delta(&[1, 3]),
            ..model::Way::default()
        }],
        relations: vec![model::Relation {
            id: 3,
            ..model::Relation::default()
        }],
        dense: dense_group(&[4, 5], &[0, 0], &[0, 0]).dense,
        ..PrimitiveGroup::default()
    };
    let block = primitive_block(&[], vec![dense_group(&[10], &[0], &[0]), plain]);

    let decoded = primitive::decode(&block, true).expect("block decodes");
    let order: Vec<(&str, i64)> = decoded
        .iter()
        .map(|element| (element.str_type(), element.id()))
        .collect();

    assert_eq!(order, vec![
        ("node", 10),
        ("node", 1),
        ("way", 2),
        ("relation", 3),
        ("node", 4),
        ("node", 5),
    ]);
}

#[test]
fn corrupt_group_fails_the_whole_block() {
    let mut broken = dense_group(&[1, 2], &[0, 0], &[0, 0]);
    if let Some(dense) = broken.dense.as_mut() {
        dense.lon.pop();
    }

    let block = primitive_block(&[], vec![dense_group(&[7], &[0], &[0]), broken]);
    assert!(primitive::decode(&block, true).is_err());
}

#[test_log::test]
fn overflowing_node_fails_the_block() {
    let plain = PrimitiveGroup {
        nodes: vec![model::Node {
            id: 1,
            lat: i64::MAX / 10,
            lon: 0,
            ..model::Node::default()
        }],
        ..PrimitiveGroup::default()
    };
    let block = primitive_block(&[], vec![dense_group(&[7], &[0], &[0]), plain]);

    assert!(matches!(
        primitive::decode(&block, true),
        Err(FormatError::Overflow { field: "lat", raw }) if raw == i64::MAX / 10
    ));
}

#[test]
fn overflowing_info_timestamp_fails_the_block() {
    let plain = PrimitiveGroup {
        nodes: vec![model::Node {
            id: 1,
            info: Some(model::Info {
                timestamp: Some(i64::MAX),
                ..model::Info::default()
            }),
            ..model::Node::default()
        }],
        ..PrimitiveGroup::default()
    };

    assert!(matches!(
        primitive::decode(&primitive_block(&[], vec![plain.clone()]), true),
        Err(FormatError::Overflow { field: "timestamp", .. })
    ));

    // Metadata that is never resolved cannot fail.
    assert!(primitive::decode(&primitive_block(&[], vec![plain]), false).is_ok());
}

#[test]
fn scope_carries_metadata_switch() {
    let block = primitive_block(&["a"], vec![]);

    assert!(PrimitiveScope::from_block(&block, true).metadata);
    assert!(!PrimitiveScope::from_block(&block, false).metadata);
    assert_eq!(PrimitiveScope::from_block(&block, true).strings.get(1), Some("a"));
}
