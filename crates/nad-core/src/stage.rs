use std::fmt;

use serde::Serialize;

/// Pipeline states in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Filtered,
    Crosswalked,
    CoordinatesProjected,
    SourceTagged,
    StreetDecomposed,
    FullAddressSynthesized,
    BlanksNulled,
    DomainTranslated,
    SpatialEnriched,
    Done,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 10] = [
        PipelineStage::Filtered,
        PipelineStage::Crosswalked,
        PipelineStage::CoordinatesProjected,
        PipelineStage::SourceTagged,
        PipelineStage::StreetDecomposed,
        PipelineStage::FullAddressSynthesized,
        PipelineStage::BlanksNulled,
        PipelineStage::DomainTranslated,
        PipelineStage::SpatialEnriched,
        PipelineStage::Done,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Filtered => "filtered",
            Self::Crosswalked => "crosswalked",
            Self::CoordinatesProjected => "coordinates_projected",
            Self::SourceTagged => "source_tagged",
            Self::StreetDecomposed => "street_decomposed",
            Self::FullAddressSynthesized => "full_address_synthesized",
            Self::BlanksNulled => "blanks_nulled",
            Self::DomainTranslated => "domain_translated",
            Self::SpatialEnriched => "spatial_enriched",
            Self::Done => "done",
        }
    }

    /// The stage after this one; `Done` is terminal.
    pub fn next(self) -> PipelineStage {
        let idx = self as usize;
        Self::ALL.get(idx + 1).copied().unwrap_or(Self::Done)
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
