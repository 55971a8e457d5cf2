use std::collections::BTreeMap;

use nad_model::{AddressRecord, AttributeFilter, FieldValue, GeometryAccessor, Point, fields};
use nad_spatial::{
    IntersectsPredicate, ReferenceTable, RegionLayer, RegionPolygon, SpatialEnricher,
    enrich_by_exact_key,
};

fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, FieldValue> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), FieldValue::from(*v)))
        .collect()
}

/// Clockwise square with lower-left corner `(x, y)`.
fn square(x: f64, y: f64, size: f64) -> Vec<(f64, f64)> {
    vec![
        (x, y),
        (x, y + size),
        (x + size, y + size),
        (x + size, y),
        (x, y),
    ]
}

fn point(id: u64, lon: f64, lat: f64) -> AddressRecord {
    AddressRecord::new(id).with_geometry(Point::wgs84(lon, lat))
}

#[test]
fn keep_all_join_leaves_outside_points_null() {
    let layer = RegionLayer::new(
        "census_places",
        vec![RegionPolygon::from_rings(
            attrs(&[("NAMELSAD20", "Kearns CDP"), ("LSAD20", "57")]),
            vec![square(0.0, 0.0, 10.0)],
        )],
    );
    let mut points = vec![
        point(1, 1.0, 1.0),
        point(2, 20.0, 20.0),
        point(3, 5.0, 5.0),
        point(4, -1.0, 3.0),
        point(5, 9.0, 2.0),
    ];
    for record in &mut points {
        record.set(fields::CENSUS_PLC, FieldValue::Null);
    }

    let enricher = SpatialEnricher::new(&GeometryAccessor, &IntersectsPredicate);
    let stats = enricher.enrich_by_region(&mut points, &layer, "NAMELSAD20", fields::CENSUS_PLC);

    assert_eq!(points.len(), 5);
    assert_eq!((stats.matched, stats.unmatched, stats.changed), (3, 2, 3));
    let ids: Vec<u64> = points.iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    let nulls = points
        .iter()
        .filter(|r| r.get(fields::CENSUS_PLC).is_null())
        .count();
    assert_eq!(nulls, 2);
    assert_eq!(points[0].text(fields::CENSUS_PLC), Some("Kearns CDP"));
}

#[test]
fn overlapping_regions_take_the_first() {
    let layer = RegionLayer::new(
        "tribal_lands",
        vec![
            RegionPolygon::from_rings(attrs(&[("tribe", "Navajo")]), vec![square(0.0, 0.0, 10.0)]),
            RegionPolygon::from_rings(attrs(&[("tribe", "Ute")]), vec![square(5.0, 5.0, 10.0)]),
        ],
    );
    let mut points = vec![point(1, 7.0, 7.0)];
    let enricher = SpatialEnricher::new(&GeometryAccessor, &IntersectsPredicate);
    let stats = enricher.enrich_by_region_with(
        &mut points,
        &layer,
        "tribe",
        fields::NAT_AM_AREA,
        |value| value.as_str().map(str::to_uppercase).into(),
    );
    assert_eq!(stats.ambiguous, 1);
    assert_eq!(points[0].text(fields::NAT_AM_AREA), Some("NAVAJO"));
}

#[test]
fn holes_and_missing_geometry_do_not_match() {
    let mut hole = square(4.0, 4.0, 2.0);
    hole.reverse();
    let layer = RegionLayer::new(
        "places",
        vec![RegionPolygon::from_rings(
            attrs(&[("NAME", "Ring Town")]),
            vec![square(0.0, 0.0, 10.0), hole],
        )],
    );
    let mut points = vec![
        point(1, 5.0, 5.0),
        point(2, 1.0, 1.0),
        AddressRecord::new(3).with_field(fields::CENSUS_PLC, "kept"),
    ];
    let enricher = SpatialEnricher::new(&GeometryAccessor, &IntersectsPredicate);
    let stats = enricher.enrich_by_region(&mut points, &layer, "NAME", fields::CENSUS_PLC);

    assert_eq!(stats.matched, 1);
    assert!(!points[0].contains(fields::CENSUS_PLC));
    assert_eq!(points[1].text(fields::CENSUS_PLC), Some("Ring Town"));
    assert_eq!(points[2].text(fields::CENSUS_PLC), Some("kept"));
}

#[test]
fn layer_filter_matches_numeric_attributes() {
    let mut numeric = BTreeMap::new();
    numeric.insert("LSAD20".to_string(), FieldValue::Integer(57));
    let layer = RegionLayer::new(
        "census_places",
        vec![
            RegionPolygon::from_rings(attrs(&[("LSAD20", "25")]), vec![square(0.0, 0.0, 1.0)]),
            RegionPolygon::from_rings(numeric, vec![square(0.0, 0.0, 1.0)]),
            RegionPolygon::from_rings(attrs(&[("LSAD20", "57")]), vec![square(0.0, 0.0, 1.0)]),
        ],
    );
    let filtered = layer.filter(&AttributeFilter::new("LSAD20", "57"));
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered.name, "census_places");
}

fn zip_table() -> ReferenceTable {
    ReferenceTable::new(vec![
        attrs(&[("ZIP5", "84101"), ("NAME", "SALT LAKE CITY")]),
        attrs(&[("ZIP5", "84604"), ("NAME", "PROVO")]),
        attrs(&[("ZIP5", "84101"), ("NAME", "SOUTH SALT LAKE")]),
    ])
}

#[test]
fn exact_key_join_is_deterministic_on_duplicates() {
    let mut points = vec![
        AddressRecord::new(1).with_field(fields::ZIP_CODE, "84101"),
        AddressRecord::new(2).with_field(fields::ZIP_CODE, 84604_i64),
        AddressRecord::new(3).with_field(fields::ZIP_CODE, "99999"),
        AddressRecord::new(4),
    ];
    let table = zip_table();
    for _ in 0..3 {
        let stats = enrich_by_exact_key(
            &mut points,
            fields::ZIP_CODE,
            &table,
            "ZIP5",
            "NAME",
            fields::POST_CITY,
        );
        assert_eq!((stats.matched, stats.unmatched, stats.ambiguous), (2, 2, 1));
        assert_eq!(points[0].text(fields::POST_CITY), Some("SALT LAKE CITY"));
        assert_eq!(points[1].text(fields::POST_CITY), Some("PROVO"));
    }
    assert!(!points[2].contains(fields::POST_CITY));
    assert!(!points[3].contains(fields::POST_CITY));
}
