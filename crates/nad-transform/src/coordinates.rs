//! Longitude/latitude copy and the `AddrPoint` string.
//!
//! Coordinates come from a [`CoordinateAccessor`] already in WGS84; this
//! module only rounds and writes them.

use nad_model::{AddressRecord, CoordinateAccessor, FieldValue, fields};

/// Round `value` to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places.min(15) as i32);
    (value * factor).round() / factor
}

/// `"<lon> <lat>"` with both coordinates rounded to `places`.
pub fn format_addr_point(lon: f64, lat: f64, places: u32) -> String {
    format!("{} {}", round_to(lon, places), round_to(lat, places))
}

/// Write `Longitude`, `Latitude` and `AddrPoint` for every record with usable
/// coordinates. Returns the number of records changed.
pub fn project_coordinates(
    records: &mut [AddressRecord],
    accessor: &dyn CoordinateAccessor,
    places: u32,
) -> usize {
    let mut changed = 0;
    for record in records.iter_mut() {
        let Some((lon, lat)) = accessor.lon_lat(record) else {
            continue;
        };
        let mut dirty = record.set(fields::LONGITUDE, FieldValue::Double(round_to(lon, places)));
        dirty |= record.set(fields::LATITUDE, FieldValue::Double(round_to(lat, places)));
        dirty |= record.set(fields::ADDR_POINT, format_addr_point(lon, lat, places));
        if dirty {
            changed += 1;
        }
    }
    changed
}
