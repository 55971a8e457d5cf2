//! Point geometry and the coordinate accessor contract.
//!
//! Reprojection is an external concern: the core only asks an accessor for a
//! record's longitude/latitude in WGS84 and never does projection math.

use serde::{Deserialize, Serialize};

use crate::record::AddressRecord;

/// EPSG code for WGS84 geographic coordinates.
pub const WGS84: u32 = 4326;

/// A point in a known coordinate reference system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// EPSG code of the coordinate reference system.
    pub epsg: u32,
}

impl Point {
    pub fn new(x: f64, y: f64, epsg: u32) -> Self {
        Self { x, y, epsg }
    }

    pub fn wgs84(lon: f64, lat: f64) -> Self {
        Self::new(lon, lat, WGS84)
    }
}

/// Supplies a record's coordinates in WGS84.
pub trait CoordinateAccessor: Send + Sync {
    /// Returns `(longitude, latitude)` or `None` when the record has no usable
    /// geometry in WGS84.
    fn lon_lat(&self, record: &AddressRecord) -> Option<(f64, f64)>;
}

/// Reads the record's own point when it is already stored in WGS84.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometryAccessor;

impl CoordinateAccessor for GeometryAccessor {
    fn lon_lat(&self, record: &AddressRecord) -> Option<(f64, f64)> {
        record
            .geometry
            .filter(|point| point.epsg == WGS84 && point.x.is_finite() && point.y.is_finite())
            .map(|point| (point.x, point.y))
    }
}
