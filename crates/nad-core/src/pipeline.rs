//! Ordered step execution over the working record set.
//!
//! # Standard order
//!
//! 1. **FilterStep** - drop records without a numeric house number
//! 2. **CrosswalkStep** - project onto the NAD schema
//! 3. **CoordinatesStep** - `Longitude`, `Latitude`, `AddrPoint`
//! 4. **SourceTagStep** - `NAD_Source`
//! 5. **StreetDecompositionStep** - split `St_PreTyp` out of `St_Name`
//! 6. **FullAddressStep** - `StNam_Full`, `AddNo_Full`
//! 7. **BlanksStep** - blank text to null
//! 8. **DomainTranslationStep** - code tables
//! 9. **SpatialEnrichmentStep** - region and reference joins

use std::collections::BTreeMap;
use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info, info_span};

use nad_map::FieldCrosswalk;
use nad_model::{AddressRecord, PipelineConfig, RecordId};
use nad_spatial::SourceRegistry;
use nad_standards::DomainCodec;

use crate::context::PipelineContext;
use crate::stage::PipelineStage;
use crate::state::{PipelineState, RunReport, StageReport};
use crate::steps::{
    BlanksStep, CoordinatesStep, CrosswalkStep, DomainTranslationStep, FilterStep,
    FullAddressStep, SourceTagStep, SpatialEnrichmentStep, StreetDecompositionStep,
};

/// A single stage of the pipeline.
pub trait ProcessingStep: Send + Sync {
    /// The state the pipeline is in after this step.
    fn stage(&self) -> PipelineStage;

    /// Run the step over the whole record set, returning its change count.
    fn execute(
        &self,
        records: &mut Vec<AddressRecord>,
        ctx: &PipelineContext<'_>,
        state: &mut PipelineState,
    ) -> Result<usize>;

    fn step_name(&self) -> &str {
        self.stage().as_str()
    }

    /// Default implementation always runs the step.
    fn should_skip(&self, _ctx: &PipelineContext<'_>) -> bool {
        false
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub records: Vec<AddressRecord>,
    pub excluded_ids: Vec<RecordId>,
    pub change_counts: BTreeMap<PipelineStage, usize>,
    pub report: RunReport,
}

/// An ordered pipeline of processing steps.
pub struct NormalizationPipeline {
    steps: Vec<Box<dyn ProcessingStep>>,
}

impl Default for NormalizationPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizationPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn add_step(mut self, step: Box<dyn ProcessingStep>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.step_name()).collect()
    }

    /// Run every step and collect the output.
    pub fn run(
        &self,
        input: Vec<AddressRecord>,
        ctx: &PipelineContext<'_>,
    ) -> Result<PipelineOutput> {
        let mut state = PipelineState::new();
        let mut records = input;
        state.report.input_records = records.len();

        self.execute_with_state(&mut records, ctx, &mut state)?;

        state.report.output_records = records.len();
        Ok(PipelineOutput {
            excluded_ids: state.report.excluded_ids.clone(),
            change_counts: state.change_counts(),
            report: state.report,
            records,
        })
    }

    /// Execute all steps with provided state.
    pub fn execute_with_state(
        &self,
        records: &mut Vec<AddressRecord>,
        ctx: &PipelineContext<'_>,
        state: &mut PipelineState,
    ) -> Result<()> {
        for step in &self.steps {
            let stage = step.stage();
            let span = info_span!("stage", name = step.step_name());
            let _guard = span.enter();

            let started = Instant::now();
            let skipped = step.should_skip(ctx);
            let changes = if skipped {
                debug!("skipped");
                0
            } else {
                step.execute(records, ctx, state)?
            };
            let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

            info!(
                stage = stage.as_str(),
                records = records.len(),
                changes,
                duration_ms,
                "stage complete"
            );
            state.report.stages.push(StageReport {
                stage,
                changes,
                records: records.len(),
                duration_ms,
                skipped,
            });
            state.stage = stage;
        }
        state.stage = PipelineStage::Done;
        Ok(())
    }
}

/// Build the standard normalization pipeline.
pub fn build_default_pipeline() -> NormalizationPipeline {
    NormalizationPipeline::new()
        .add_step(Box::new(FilterStep))
        .add_step(Box::new(CrosswalkStep))
        .add_step(Box::new(CoordinatesStep))
        .add_step(Box::new(SourceTagStep))
        .add_step(Box::new(StreetDecompositionStep))
        .add_step(Box::new(FullAddressStep))
        .add_step(Box::new(BlanksStep))
        .add_step(Box::new(DomainTranslationStep))
        .add_step(Box::new(SpatialEnrichmentStep))
}

/// Run the standard pipeline with the default accessor and predicate.
pub fn run_pipeline(
    input: Vec<AddressRecord>,
    codec: &DomainCodec,
    crosswalk: &FieldCrosswalk,
    sources: &SourceRegistry,
    config: &PipelineConfig,
) -> Result<PipelineOutput> {
    let ctx = PipelineContext::new(config, codec, crosswalk, sources);
    build_default_pipeline().run(input, &ctx)
}
