//! File-backed region and reference sources.

use std::path::{Path, PathBuf};

use nad_model::Result;
use nad_spatial::{ReferenceSource, ReferenceTable, RegionLayer, RegionSource, SourceRegistry};

use crate::error::IngestError;
use crate::reference::read_reference_csv;
use crate::regions::read_region_layer;

/// Region layer read from a JSON file on each fetch.
#[derive(Debug, Clone)]
pub struct JsonRegionSource {
    name: String,
    path: PathBuf,
}

impl JsonRegionSource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

impl RegionSource for JsonRegionSource {
    fn fetch(&self) -> Result<RegionLayer> {
        Ok(read_region_layer(&self.name, &self.path)?)
    }
}

/// Reference table read from a CSV file on each fetch.
#[derive(Debug, Clone)]
pub struct CsvReferenceSource {
    path: PathBuf,
}

impl CsvReferenceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReferenceSource for CsvReferenceSource {
    fn fetch(&self) -> Result<ReferenceTable> {
        Ok(read_reference_csv(&self.path)?)
    }
}

/// Resolve a location hint to a local path. URLs are rejected.
pub fn resolve_location(location: &str) -> std::result::Result<PathBuf, IngestError> {
    let trimmed = location.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return Err(IngestError::RemoteLocation(trimmed.to_string()));
    }
    Ok(PathBuf::from(trimmed))
}

/// Register a file source by extension: `.json` as a region layer, `.csv` as
/// a reference table.
pub fn register_location(
    registry: &mut SourceRegistry,
    name: &str,
    location: &str,
) -> std::result::Result<(), IngestError> {
    let path = resolve_location(location)?;
    match extension(&path).as_deref() {
        Some("json") => registry.register_region(name, Box::new(JsonRegionSource::new(name, path))),
        Some("csv") => registry.register_reference(name, Box::new(CsvReferenceSource::new(path))),
        _ => return Err(IngestError::UnsupportedFormat(path)),
    }
    Ok(())
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}
