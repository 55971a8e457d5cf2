//! Domain table loading.
//!
//! Built-in tables ship with the crate. A jurisdiction can replace any of
//! them with a two-column CSV (`Code`, `Value`), e.g.:
//!
//! ```text
//! Code,Value
//! ST,STREET
//! AVE,AVENUE
//! ```

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use nad_model::{DomainKind, NadError, Result};

use crate::domain::{DomainCodec, DomainTable};
use crate::tables;

/// Built-in entries for a domain.
pub fn builtin_entries(kind: DomainKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        DomainKind::StreetType => tables::STREET_TYPES,
        DomainKind::Direction => tables::DIRECTIONS,
        DomainKind::CountyFips => tables::COUNTY_FIPS,
        DomainKind::TribalArea => tables::TRIBAL_AREAS,
    }
}

/// Load the built-in table for one domain.
pub fn load_builtin_table(kind: DomainKind) -> Result<DomainTable> {
    DomainTable::new(kind, builtin_entries(kind).iter().copied())
}

/// Load the default codec with all four built-in tables.
pub fn load_default_codec() -> Result<DomainCodec> {
    let tables = DomainKind::ALL
        .into_iter()
        .map(load_builtin_table)
        .collect::<Result<Vec<_>>>()?;
    Ok(DomainCodec::new(tables))
}

/// Load a domain table from a CSV file with `Code` and `Value` columns.
pub fn load_table_csv(kind: DomainKind, path: &Path) -> Result<DomainTable> {
    let csv_error = |message: String| NadError::Csv {
        path: path.to_path_buf(),
        message,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| csv_error(e.to_string()))?;
    let headers = reader
        .headers()
        .map_err(|e| csv_error(e.to_string()))?
        .clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim_matches('\u{feff}').eq_ignore_ascii_case(name))
            .ok_or_else(|| csv_error(format!("missing `{name}` column")))
    };
    let code_idx = column("Code")?;
    let value_idx = column("Value")?;

    let mut pairs = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| csv_error(e.to_string()))?;
        let code = row.get(code_idx).unwrap_or_default();
        let value = row.get(value_idx).unwrap_or_default();
        if code.is_empty() || value.is_empty() {
            continue;
        }
        pairs.push((code.to_string(), value.to_string()));
    }
    debug!(
        table = kind.as_str(),
        entries = pairs.len(),
        path = %path.display(),
        "loaded domain table"
    );
    DomainTable::new(kind, pairs)
}

/// Load the default codec, replacing built-in tables with the given overrides.
pub fn load_codec_with_overrides(overrides: &[(DomainKind, &Path)]) -> Result<DomainCodec> {
    let mut tables = Vec::with_capacity(DomainKind::ALL.len());
    for kind in DomainKind::ALL {
        let table = match overrides.iter().find(|(k, _)| *k == kind) {
            Some((_, path)) => load_table_csv(kind, path)?,
            None => load_builtin_table(kind)?,
        };
        tables.push(table);
    }
    Ok(DomainCodec::new(tables))
}
