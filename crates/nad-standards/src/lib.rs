#![deny(unsafe_code)]

pub mod domain;
pub mod loader;
pub mod tables;

pub use crate::domain::{DomainCodec, DomainTable};
pub use crate::loader::{
    builtin_entries, load_builtin_table, load_codec_with_overrides, load_default_codec,
    load_table_csv,
};
