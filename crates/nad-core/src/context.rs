use nad_map::FieldCrosswalk;
use nad_model::{CoordinateAccessor, GeometryAccessor, PipelineConfig};
use nad_spatial::{IntersectsPredicate, SourceRegistry, SpatialPredicate};
use nad_standards::DomainCodec;

/// Read-only collaborators shared by every pipeline step.
#[derive(Clone, Copy)]
pub struct PipelineContext<'a> {
    pub config: &'a PipelineConfig,
    pub codec: &'a DomainCodec,
    pub crosswalk: &'a FieldCrosswalk,
    pub sources: &'a SourceRegistry,
    pub accessor: &'a dyn CoordinateAccessor,
    pub predicate: &'a dyn SpatialPredicate,
}

impl<'a> PipelineContext<'a> {
    /// Context with the default coordinate accessor and `geo` predicate.
    pub fn new(
        config: &'a PipelineConfig,
        codec: &'a DomainCodec,
        crosswalk: &'a FieldCrosswalk,
        sources: &'a SourceRegistry,
    ) -> Self {
        Self {
            config,
            codec,
            crosswalk,
            sources,
            accessor: &GeometryAccessor,
            predicate: &IntersectsPredicate,
        }
    }

    pub fn with_accessor(mut self, accessor: &'a dyn CoordinateAccessor) -> Self {
        self.accessor = accessor;
        self
    }

    pub fn with_predicate(mut self, predicate: &'a dyn SpatialPredicate) -> Self {
        self.predicate = predicate;
        self
    }
}
