use geo::{Coord, Intersects};

use crate::layer::RegionPolygon;

/// Decides whether a point falls in a region polygon.
pub trait SpatialPredicate: Send + Sync {
    fn matches(&self, polygon: &RegionPolygon, point: Coord<f64>) -> bool;
}

/// `geo` intersection, boundary inclusive, behind a bounding box check.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntersectsPredicate;

impl SpatialPredicate for IntersectsPredicate {
    fn matches(&self, polygon: &RegionPolygon, point: Coord<f64>) -> bool {
        polygon.may_contain(point) && polygon.geometry.intersects(&point)
    }
}
