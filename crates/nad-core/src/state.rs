//! Mutable state shared across pipeline steps, and the run report.

use std::collections::BTreeMap;

use serde::Serialize;

use nad_map::SchemaMismatch;
use nad_model::{RecordId, Result};
use nad_spatial::{JoinStats, ReferenceTable, RegionLayer, SourceRegistry};

use crate::stage::PipelineStage;

/// Change count and timing of one executed stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub stage: PipelineStage,
    pub changes: usize,
    pub records: usize,
    pub duration_ms: u64,
    pub skipped: bool,
}

/// Outcome of one enrichment join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinReport {
    pub source: String,
    pub target_field: String,
    pub stats: JoinStats,
}

/// Everything a run noticed that did not abort it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub input_records: usize,
    pub output_records: usize,
    pub excluded_ids: Vec<RecordId>,
    pub schema_mismatches: Vec<SchemaMismatch>,
    pub joins: Vec<JoinReport>,
    pub stages: Vec<StageReport>,
}

impl RunReport {
    pub fn ambiguous_matches(&self) -> usize {
        self.joins.iter().map(|join| join.stats.ambiguous).sum()
    }

    pub fn unmatched(&self) -> usize {
        self.joins.iter().map(|join| join.stats.unmatched).sum()
    }
}

/// State carried from step to step within one run.
#[derive(Debug)]
pub struct PipelineState {
    pub stage: PipelineStage,
    /// Region layers fetched so far, by source name.
    pub regions: BTreeMap<String, RegionLayer>,
    /// Reference tables fetched so far, by source name.
    pub references: BTreeMap<String, ReferenceTable>,
    pub report: RunReport,
}

impl Default for PipelineState {
    fn default() -> Self {
        Self {
            stage: PipelineStage::Filtered,
            regions: BTreeMap::new(),
            references: BTreeMap::new(),
            report: RunReport::default(),
        }
    }
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a region layer unless it is already cached.
    pub fn ensure_region(&mut self, sources: &SourceRegistry, name: &str) -> Result<()> {
        if !self.regions.contains_key(name) {
            let layer = sources.fetch_region(name)?;
            tracing::debug!(source = name, polygons = layer.len(), "region layer fetched");
            self.regions.insert(name.to_string(), layer);
        }
        Ok(())
    }

    /// Fetch a reference table unless it is already cached.
    pub fn ensure_reference(&mut self, sources: &SourceRegistry, name: &str) -> Result<()> {
        if !self.references.contains_key(name) {
            let table = sources.fetch_reference(name)?;
            tracing::debug!(source = name, rows = table.len(), "reference table fetched");
            self.references.insert(name.to_string(), table);
        }
        Ok(())
    }

    /// Change counts by stage.
    pub fn change_counts(&self) -> BTreeMap<PipelineStage, usize> {
        self.report
            .stages
            .iter()
            .map(|stage| (stage.stage, stage.changes))
            .collect()
    }
}
