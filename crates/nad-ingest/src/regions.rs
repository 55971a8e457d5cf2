//! Region layers stored as plain JSON.
//!
//! ```json
//! [
//!   { "attributes": { "tribe": "Navajo", "state_lgd": "Tribal Lands" },
//!     "rings": [[[-110.1, 37.0], [-110.1, 37.5], [-109.5, 37.5], [-110.1, 37.0]]] }
//! ]
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use nad_model::FieldValue;
use nad_spatial::{RegionLayer, RegionPolygon};

use crate::error::IngestError;

#[derive(Debug, Deserialize)]
struct RegionFeature {
    #[serde(default)]
    attributes: BTreeMap<String, Value>,
    rings: Vec<Vec<[f64; 2]>>,
}

fn attribute_value(value: Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Null,
        Value::String(text) => FieldValue::Text(text),
        Value::Number(number) => match number.as_i64() {
            Some(int) => FieldValue::Integer(int),
            None => number.as_f64().map_or(FieldValue::Null, FieldValue::Double),
        },
        other => FieldValue::Text(other.to_string()),
    }
}

/// Parse a region layer from JSON text.
pub fn parse_region_layer(name: &str, json: &str) -> Result<RegionLayer, serde_json::Error> {
    let features: Vec<RegionFeature> = serde_json::from_str(json)?;
    Ok(build_layer(name, features))
}

/// Read a region layer from a JSON file.
pub fn read_region_layer(name: &str, path: &Path) -> Result<RegionLayer, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let features: Vec<RegionFeature> = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| IngestError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(build_layer(name, features))
}

fn build_layer(name: &str, features: Vec<RegionFeature>) -> RegionLayer {
    let polygons = features
        .into_iter()
        .map(|feature| {
            let attributes = feature
                .attributes
                .into_iter()
                .map(|(key, value)| (key, attribute_value(value)))
                .collect();
            let rings = feature
                .rings
                .into_iter()
                .map(|ring| ring.into_iter().map(|[x, y]| (x, y)).collect())
                .collect();
            RegionPolygon::from_rings(attributes, rings)
        })
        .collect();
    RegionLayer::new(name, polygons)
}
