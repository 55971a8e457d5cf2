#![deny(unsafe_code)]

//! Spatial and reference enrichment.
//!
//! Region polygons come from a [`RegionSource`]; the default
//! [`IntersectsPredicate`] uses `geo` for the point-in-polygon test.

pub mod join;
pub mod layer;
pub mod predicate;
pub mod source;

pub use join::{JoinStats, SpatialEnricher, enrich_by_exact_key};
pub use layer::{RegionLayer, RegionPolygon};
pub use predicate::{IntersectsPredicate, SpatialPredicate};
pub use source::{
    InMemoryReferenceSource, InMemoryRegionSource, ReferenceRow, ReferenceSource,
    ReferenceTable, RegionSource, SourceRegistry,
};
