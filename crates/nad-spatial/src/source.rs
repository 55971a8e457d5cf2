//! External reference sources.
//!
//! Each enrichment names a source; the pipeline fetches it once and caches
//! the result for the run. Adapters for files live in `nad-ingest`.

use std::collections::BTreeMap;

use nad_model::{FieldValue, NadError, Result};

use crate::layer::RegionLayer;

/// Supplies a polygon layer.
pub trait RegionSource: Send + Sync {
    fn fetch(&self) -> Result<RegionLayer>;
}

/// Supplies a tabular reference dataset for equality lookups.
pub trait ReferenceSource: Send + Sync {
    fn fetch(&self) -> Result<ReferenceTable>;
}

pub type ReferenceRow = BTreeMap<String, FieldValue>;

/// Rows of a reference dataset in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceTable {
    rows: Vec<ReferenceRow>,
}

impl ReferenceTable {
    pub fn new(rows: Vec<ReferenceRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ReferenceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A layer held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryRegionSource(pub RegionLayer);

impl RegionSource for InMemoryRegionSource {
    fn fetch(&self) -> Result<RegionLayer> {
        Ok(self.0.clone())
    }
}

/// A reference table held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryReferenceSource(pub ReferenceTable);

impl ReferenceSource for InMemoryReferenceSource {
    fn fetch(&self) -> Result<ReferenceTable> {
        Ok(self.0.clone())
    }
}

/// Named region and reference sources available to a run.
#[derive(Default)]
pub struct SourceRegistry {
    regions: BTreeMap<String, Box<dyn RegionSource>>,
    references: BTreeMap<String, Box<dyn ReferenceSource>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_region(&mut self, name: impl Into<String>, source: Box<dyn RegionSource>) {
        self.regions.insert(name.into(), source);
    }

    pub fn register_reference(
        &mut self,
        name: impl Into<String>,
        source: Box<dyn ReferenceSource>,
    ) {
        self.references.insert(name.into(), source);
    }

    pub fn with_region(mut self, name: impl Into<String>, source: impl RegionSource + 'static) -> Self {
        self.register_region(name, Box::new(source));
        self
    }

    pub fn with_reference(
        mut self,
        name: impl Into<String>,
        source: impl ReferenceSource + 'static,
    ) -> Self {
        self.register_reference(name, Box::new(source));
        self
    }

    pub fn has_region(&self, name: &str) -> bool {
        self.regions.contains_key(name)
    }

    pub fn has_reference(&self, name: &str) -> bool {
        self.references.contains_key(name)
    }

    /// Fetch a region layer. An unregistered name is reported the same way as
    /// a failed fetch.
    pub fn fetch_region(&self, name: &str) -> Result<RegionLayer> {
        let source = self
            .regions
            .get(name)
            .ok_or_else(|| NadError::unavailable(name, "no region source registered"))?;
        source.fetch().map_err(|err| into_unavailable(name, err))
    }

    pub fn fetch_reference(&self, name: &str) -> Result<ReferenceTable> {
        let source = self
            .references
            .get(name)
            .ok_or_else(|| NadError::unavailable(name, "no reference source registered"))?;
        source.fetch().map_err(|err| into_unavailable(name, err))
    }

    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    pub fn reference_names(&self) -> impl Iterator<Item = &str> {
        self.references.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for SourceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceRegistry")
            .field("regions", &self.regions.keys().collect::<Vec<_>>())
            .field("references", &self.references.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn into_unavailable(name: &str, err: NadError) -> NadError {
    match err {
        NadError::ExternalSourceUnavailable { .. } => err,
        other => NadError::unavailable(name, other),
    }
}
