pub mod error;
pub mod fields;
pub mod geometry;
pub mod ids;
pub mod options;
pub mod record;
pub mod value;

pub use error::{NadError, Result};
pub use geometry::{CoordinateAccessor, GeometryAccessor, Point, WGS84};
pub use ids::RecordId;
pub use options::{
    AttributeFilter, DomainKind, ExactKeyEnrichment, PipelineConfig, RegionEnrichment,
};
pub use record::AddressRecord;
pub use value::FieldValue;
