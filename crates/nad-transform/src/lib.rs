//! Record-level NAD transformations.
//!
//! Every function here operates on a slice of records in place and returns
//! the number of values it changed:
//!
//! - **street**: composite street name decomposition
//! - **address**: `StNam_Full` / `AddNo_Full` synthesis
//! - **blanks**: blank-to-null cleanup
//! - **coordinates**: longitude/latitude copy and `AddrPoint`
//! - **translate**: domain code translation
//! - **constant**: constant field values (`NAD_Source`)

pub mod address;
pub mod blanks;
pub mod constant;
pub mod coordinates;
pub mod street;
pub mod translate;

pub use address::{join_street_name, synthesize_full_address_numbers, synthesize_full_street_names};
pub use blanks::blanks_to_nulls;
pub use constant::apply_constant;
pub use coordinates::{format_addr_point, project_coordinates, round_to};
pub use street::{StreetNameComponents, decompose, decompose_street_names};
pub use translate::{TRANSLATED_FIELDS, translate_domain_fields};
