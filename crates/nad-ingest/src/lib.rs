#![deny(unsafe_code)]

//! File adapters: address point CSVs in, region layers and reference tables
//! for enrichment, NAD CSV out.

pub mod error;
pub mod points;
pub mod reference;
pub mod regions;
pub mod sources;
pub mod writer;

pub use error::IngestError;
pub use points::{PointCsvOptions, read_address_points};
pub use reference::read_reference_csv;
pub use regions::{parse_region_layer, read_region_layer};
pub use sources::{CsvReferenceSource, JsonRegionSource, register_location, resolve_location};
pub use writer::{write_records, write_records_csv};
