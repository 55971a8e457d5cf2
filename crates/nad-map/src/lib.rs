#![deny(unsafe_code)]

//! Field crosswalk: projects jurisdiction records onto the NAD schema.

pub mod crosswalk;
pub mod defaults;
pub mod error;
pub mod rule;

pub use crosswalk::{CrosswalkOutcome, FieldCrosswalk, SchemaMismatch};
pub use defaults::{default_nad_crosswalk, default_rules};
pub use error::MappingError;
pub use rule::{CrosswalkRule, Derivation};
