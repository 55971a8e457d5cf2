use std::path::Path;

use csv::ReaderBuilder;

use nad_model::FieldValue;
use nad_spatial::{ReferenceRow, ReferenceTable};

use crate::error::IngestError;

/// Read a CSV reference table. Cells are kept as text with surrounding
/// whitespace removed; empty cells become null.
pub fn read_reference_csv(path: &Path) -> Result<ReferenceTable, IngestError> {
    let csv_error = |source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').to_string())
        .collect();

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        let cells: ReferenceRow = headers
            .iter()
            .zip(row.iter())
            .map(|(header, cell)| {
                let value = if cell.is_empty() {
                    FieldValue::Null
                } else {
                    FieldValue::text(cell)
                };
                (header.clone(), value)
            })
            .collect();
        rows.push(cells);
    }
    Ok(ReferenceTable::new(rows))
}
