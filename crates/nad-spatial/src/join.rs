//! Keep-all enrichment joins.
//!
//! Both joins are one-to-one: every input record comes out exactly once and
//! records without a match keep their current target value.

use std::collections::BTreeMap;

use geo::Coord;
use serde::Serialize;
use tracing::debug;

use nad_model::{AddressRecord, CoordinateAccessor, FieldValue};

use crate::layer::RegionLayer;
use crate::predicate::SpatialPredicate;
use crate::source::ReferenceTable;

/// Match counts for one join.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JoinStats {
    pub matched: usize,
    pub unmatched: usize,
    /// Matched records that had more than one candidate.
    pub ambiguous: usize,
    /// Records whose target value changed.
    pub changed: usize,
}

/// Point-in-polygon joins over a record set.
pub struct SpatialEnricher<'a> {
    accessor: &'a dyn CoordinateAccessor,
    predicate: &'a dyn SpatialPredicate,
}

impl<'a> SpatialEnricher<'a> {
    pub fn new(accessor: &'a dyn CoordinateAccessor, predicate: &'a dyn SpatialPredicate) -> Self {
        Self {
            accessor,
            predicate,
        }
    }

    /// Copy `region_attribute` of the polygon containing each point into
    /// `target_field`. Overlapping polygons resolve to the first in layer
    /// order.
    pub fn enrich_by_region(
        &self,
        points: &mut [AddressRecord],
        layer: &RegionLayer,
        region_attribute: &str,
        target_field: &str,
    ) -> JoinStats {
        self.enrich_by_region_with(points, layer, region_attribute, target_field, FieldValue::clone)
    }

    /// Like [`enrich_by_region`](Self::enrich_by_region), passing the joined
    /// value through `map` first.
    pub fn enrich_by_region_with(
        &self,
        points: &mut [AddressRecord],
        layer: &RegionLayer,
        region_attribute: &str,
        target_field: &str,
        map: impl Fn(&FieldValue) -> FieldValue,
    ) -> JoinStats {
        let mut stats = JoinStats::default();
        for record in points.iter_mut() {
            let Some((lon, lat)) = self.accessor.lon_lat(record) else {
                stats.unmatched += 1;
                continue;
            };
            let point = Coord { x: lon, y: lat };
            let mut hits = layer
                .polygons()
                .iter()
                .filter(|polygon| self.predicate.matches(polygon, point));
            let Some(first) = hits.next() else {
                stats.unmatched += 1;
                continue;
            };
            stats.matched += 1;
            let extra = hits.count();
            if extra > 0 {
                stats.ambiguous += 1;
                debug!(
                    record = %record.id,
                    layer = %layer.name,
                    candidates = extra + 1,
                    "point falls in several regions, keeping the first"
                );
            }
            if record.set(target_field, map(first.attribute(region_attribute))) {
                stats.changed += 1;
            }
        }
        stats
    }
}

/// Copy `reference_value_field` from the reference row whose
/// `reference_key_field` equals the record's `key_field`.
///
/// Keys compare as code strings. When several rows share a key the first row
/// wins.
pub fn enrich_by_exact_key(
    points: &mut [AddressRecord],
    key_field: &str,
    table: &ReferenceTable,
    reference_key_field: &str,
    reference_value_field: &str,
    target_field: &str,
) -> JoinStats {
    let mut index: BTreeMap<String, (&FieldValue, usize)> = BTreeMap::new();
    for row in table.rows() {
        let Some(key) = row.get(reference_key_field).and_then(FieldValue::as_code) else {
            continue;
        };
        let value = row.get(reference_value_field).unwrap_or(&FieldValue::Null);
        index.entry(key).or_insert((value, 0)).1 += 1;
    }

    let mut stats = JoinStats::default();
    for record in points.iter_mut() {
        let hit = record
            .get(key_field)
            .as_code()
            .and_then(|key| index.get(&key));
        let Some((value, rows)) = hit else {
            stats.unmatched += 1;
            continue;
        };
        stats.matched += 1;
        if *rows > 1 {
            stats.ambiguous += 1;
        }
        if record.set(target_field, (*value).clone()) {
            stats.changed += 1;
        }
    }
    if stats.ambiguous > 0 {
        debug!(
            key_field,
            ambiguous = stats.ambiguous,
            "reference keys matched several rows, kept the first"
        );
    }
    stats
}
