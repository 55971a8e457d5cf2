//! Region polygons and layers.

use std::collections::BTreeMap;

use geo::{BoundingRect, Coord, LineString, MultiPolygon, Polygon, Rect, Winding};

use nad_model::{AttributeFilter, FieldValue};

static NULL: FieldValue = FieldValue::Null;

/// A reference polygon with categorical attributes.
#[derive(Debug, Clone)]
pub struct RegionPolygon {
    pub attributes: BTreeMap<String, FieldValue>,
    pub geometry: MultiPolygon<f64>,
    bbox: Option<Rect<f64>>,
}

impl RegionPolygon {
    pub fn new(attributes: BTreeMap<String, FieldValue>, geometry: MultiPolygon<f64>) -> Self {
        let bbox = geometry.bounding_rect();
        Self {
            attributes,
            geometry,
            bbox,
        }
    }

    /// Build from coordinate rings.
    ///
    /// A counter-clockwise ring following an exterior is a hole in that
    /// exterior; every other ring starts a new polygon.
    pub fn from_rings(
        attributes: BTreeMap<String, FieldValue>,
        rings: Vec<Vec<(f64, f64)>>,
    ) -> Self {
        let mut parts: Vec<(LineString<f64>, Vec<LineString<f64>>)> = Vec::new();
        for ring in rings {
            let ring = LineString::from(ring);
            if ring.0.len() < 3 {
                continue;
            }
            match parts.last_mut() {
                Some((_, holes)) if ring.is_ccw() => holes.push(ring),
                _ => parts.push((ring, Vec::new())),
            }
        }
        let polygons = parts
            .into_iter()
            .map(|(exterior, holes)| Polygon::new(exterior, holes))
            .collect();
        Self::new(attributes, MultiPolygon::new(polygons))
    }

    pub fn attribute(&self, name: &str) -> &FieldValue {
        self.attributes.get(name).unwrap_or(&NULL)
    }

    /// Cheap bounding box test.
    pub fn may_contain(&self, coord: Coord<f64>) -> bool {
        self.bbox.is_some_and(|bbox| {
            let (min, max) = (bbox.min(), bbox.max());
            coord.x >= min.x && coord.x <= max.x && coord.y >= min.y && coord.y <= max.y
        })
    }
}

/// An ordered collection of region polygons from one source.
#[derive(Debug, Clone, Default)]
pub struct RegionLayer {
    pub name: String,
    polygons: Vec<RegionPolygon>,
}

impl RegionLayer {
    pub fn new(name: impl Into<String>, polygons: Vec<RegionPolygon>) -> Self {
        Self {
            name: name.into(),
            polygons,
        }
    }

    pub fn polygons(&self) -> &[RegionPolygon] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Polygons whose `filter.field` attribute equals `filter.value`, in
    /// layer order. Numeric attributes compare as code strings.
    pub fn filter(&self, filter: &AttributeFilter) -> RegionLayer {
        let wanted = filter.value.trim();
        let polygons = self
            .polygons
            .iter()
            .filter(|polygon| {
                polygon
                    .attribute(&filter.field)
                    .as_code()
                    .is_some_and(|code| code == wanted)
            })
            .cloned()
            .collect();
        RegionLayer::new(self.name.clone(), polygons)
    }
}
