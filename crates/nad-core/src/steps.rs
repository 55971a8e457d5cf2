//! Standard processing steps.

use anyhow::{Context, Result};
use tracing::warn;

use nad_model::{AddressRecord, FieldValue, fields};
use nad_spatial::{SpatialEnricher, enrich_by_exact_key};
use nad_transform::{
    apply_constant, blanks_to_nulls, decompose_street_names, project_coordinates,
    synthesize_full_address_numbers, synthesize_full_street_names, translate_domain_fields,
};

use crate::context::PipelineContext;
use crate::filter::filter_records;
use crate::pipeline::ProcessingStep;
use crate::stage::PipelineStage;
use crate::state::{JoinReport, PipelineState};

/// Drops records whose key field is not a decimal house number.
pub struct FilterStep;

impl ProcessingStep for FilterStep {
    fn stage(&self) -> PipelineStage {
        PipelineStage::Filtered
    }

    fn execute(
        &self,
        records: &mut Vec<AddressRecord>,
        ctx: &PipelineContext<'_>,
        state: &mut PipelineState,
    ) -> Result<usize> {
        let outcome = filter_records(std::mem::take(records), &ctx.config.key_field);
        *records = outcome.valid;
        let excluded = outcome.excluded_ids.len();
        state.report.excluded_ids.extend(outcome.excluded_ids);
        Ok(excluded)
    }
}

/// Projects raw records onto the NAD schema.
pub struct CrosswalkStep;

impl ProcessingStep for CrosswalkStep {
    fn stage(&self) -> PipelineStage {
        PipelineStage::Crosswalked
    }

    fn execute(
        &self,
        records: &mut Vec<AddressRecord>,
        ctx: &PipelineContext<'_>,
        state: &mut PipelineState,
    ) -> Result<usize> {
        let outcome = ctx.crosswalk.project_all(records);
        let changed = records
            .iter()
            .zip(&outcome.records)
            .filter(|(before, after)| before != after)
            .count();
        *records = outcome.records;
        state
            .report
            .schema_mismatches
            .extend(outcome.schema_mismatches);
        Ok(changed)
    }
}

pub struct CoordinatesStep;

impl ProcessingStep for CoordinatesStep {
    fn stage(&self) -> PipelineStage {
        PipelineStage::CoordinatesProjected
    }

    fn execute(
        &self,
        records: &mut Vec<AddressRecord>,
        ctx: &PipelineContext<'_>,
        _state: &mut PipelineState,
    ) -> Result<usize> {
        let places = ctx.config.coordinate_precision;
        let changed = project_coordinates(records, ctx.accessor, places);
        let missing = records
            .iter()
            .filter(|record| ctx.accessor.lon_lat(record).is_none())
            .count();
        if missing > 0 {
            warn!(missing, "records without WGS84 coordinates");
        }
        Ok(changed)
    }
}

pub struct SourceTagStep;

impl ProcessingStep for SourceTagStep {
    fn stage(&self) -> PipelineStage {
        PipelineStage::SourceTagged
    }

    fn execute(
        &self,
        records: &mut Vec<AddressRecord>,
        ctx: &PipelineContext<'_>,
        _state: &mut PipelineState,
    ) -> Result<usize> {
        Ok(apply_constant(
            records,
            fields::NAD_SOURCE,
            ctx.config.source_label.as_str(),
        ))
    }
}

pub struct StreetDecompositionStep;

impl ProcessingStep for StreetDecompositionStep {
    fn stage(&self) -> PipelineStage {
        PipelineStage::StreetDecomposed
    }

    fn execute(
        &self,
        records: &mut Vec<AddressRecord>,
        _ctx: &PipelineContext<'_>,
        _state: &mut PipelineState,
    ) -> Result<usize> {
        Ok(decompose_street_names(records))
    }
}

pub struct FullAddressStep;

impl ProcessingStep for FullAddressStep {
    fn stage(&self) -> PipelineStage {
        PipelineStage::FullAddressSynthesized
    }

    fn execute(
        &self,
        records: &mut Vec<AddressRecord>,
        ctx: &PipelineContext<'_>,
        _state: &mut PipelineState,
    ) -> Result<usize> {
        let names = synthesize_full_street_names(records, ctx.codec);
        let numbers = synthesize_full_address_numbers(records);
        Ok(names + numbers)
    }
}

pub struct BlanksStep;

impl ProcessingStep for BlanksStep {
    fn stage(&self) -> PipelineStage {
        PipelineStage::BlanksNulled
    }

    fn execute(
        &self,
        records: &mut Vec<AddressRecord>,
        _ctx: &PipelineContext<'_>,
        _state: &mut PipelineState,
    ) -> Result<usize> {
        Ok(blanks_to_nulls(records, fields::BLANK_TO_NULL_FIELDS))
    }
}

pub struct DomainTranslationStep;

impl ProcessingStep for DomainTranslationStep {
    fn stage(&self) -> PipelineStage {
        PipelineStage::DomainTranslated
    }

    fn execute(
        &self,
        records: &mut Vec<AddressRecord>,
        ctx: &PipelineContext<'_>,
        _state: &mut PipelineState,
    ) -> Result<usize> {
        Ok(translate_domain_fields(records, ctx.codec))
    }
}

/// Region joins in configured order, then exact-key joins.
pub struct SpatialEnrichmentStep;

impl ProcessingStep for SpatialEnrichmentStep {
    fn stage(&self) -> PipelineStage {
        PipelineStage::SpatialEnriched
    }

    fn execute(
        &self,
        records: &mut Vec<AddressRecord>,
        ctx: &PipelineContext<'_>,
        state: &mut PipelineState,
    ) -> Result<usize> {
        let enricher = SpatialEnricher::new(ctx.accessor, ctx.predicate);
        let mut changed = 0;

        for enrichment in &ctx.config.region_enrichments {
            state
                .ensure_region(ctx.sources, &enrichment.source)
                .with_context(|| format!("loading region source `{}`", enrichment.source))?;
            let Some(layer) = state.regions.get(&enrichment.source) else {
                continue;
            };
            let filtered;
            let layer = match &enrichment.filter {
                Some(filter) => {
                    filtered = layer.filter(filter);
                    &filtered
                }
                None => layer,
            };
            let stats = enricher.enrich_by_region_with(
                records,
                layer,
                &enrichment.region_attribute,
                &enrichment.target_field,
                |value| match enrichment.translate_with {
                    Some(kind) => FieldValue::from(ctx.codec.canonical(kind, value)),
                    None => value.clone(),
                },
            );
            changed += stats.changed;
            state.report.joins.push(JoinReport {
                source: enrichment.source.clone(),
                target_field: enrichment.target_field.clone(),
                stats,
            });
        }

        for enrichment in &ctx.config.exact_key_enrichments {
            state
                .ensure_reference(ctx.sources, &enrichment.source)
                .with_context(|| format!("loading reference source `{}`", enrichment.source))?;
            let Some(table) = state.references.get(&enrichment.source) else {
                continue;
            };
            let stats = enrich_by_exact_key(
                records,
                &enrichment.key_field,
                table,
                &enrichment.reference_key_field,
                &enrichment.reference_value_field,
                &enrichment.target_field,
            );
            changed += stats.changed;
            state.report.joins.push(JoinReport {
                source: enrichment.source.clone(),
                target_field: enrichment.target_field.clone(),
                stats,
            });
        }
        Ok(changed)
    }

    fn should_skip(&self, ctx: &PipelineContext<'_>) -> bool {
        ctx.config.region_enrichments.is_empty() && ctx.config.exact_key_enrichments.is_empty()
    }
}
