//! Address point CSV reader.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use nad_model::{AddressRecord, Point, WGS84};

use crate::error::IngestError;

/// Column layout of an address point CSV.
#[derive(Debug, Clone)]
pub struct PointCsvOptions {
    /// Column holding the object id. Rows are numbered from 1 when absent.
    pub id_column: String,
    pub x_column: String,
    pub y_column: String,
    /// EPSG code of the x/y columns.
    pub epsg: u32,
}

impl Default for PointCsvOptions {
    fn default() -> Self {
        Self {
            id_column: "OBJECTID".to_string(),
            x_column: "x".to_string(),
            y_column: "y".to_string(),
            epsg: WGS84,
        }
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read address points. Every other column becomes a text field.
///
/// Blank or unparsable coordinates leave the record without geometry, and an
/// object id that is not a non-negative whole number falls back to the row
/// number. Neither aborts the read; unparsable cells are logged and counted.
pub fn read_address_points(
    path: &Path,
    options: &PointCsvOptions,
) -> Result<Vec<AddressRecord>, IngestError> {
    let csv_error = |source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();

    let position = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let require = |name: &str| {
        position(name).ok_or_else(|| IngestError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
    };
    let x_idx = require(&options.x_column)?;
    let y_idx = require(&options.y_column)?;
    let id_idx = position(&options.id_column);

    let mut records = Vec::new();
    let mut bad_coordinates = 0_usize;
    let mut bad_ids = 0_usize;
    for (row_idx, row) in reader.records().enumerate() {
        let row = row.map_err(csv_error)?;
        let row_number = row_idx + 1;
        let number = |idx: usize, column: &str| -> Result<Option<f64>, IngestError> {
            let raw = row.get(idx).unwrap_or("").trim();
            if raw.is_empty() {
                return Ok(None);
            }
            raw.parse().map(Some).map_err(|_| IngestError::InvalidNumber {
                path: path.to_path_buf(),
                row: row_number,
                column: column.to_string(),
                value: raw.to_string(),
            })
        };

        let id = match id_idx.map(|idx| number(idx, &options.id_column)) {
            Some(Ok(Some(id))) if id.fract() == 0.0 && id >= 0.0 => id as u64,
            Some(Err(error)) => {
                debug!(%error, "using row number as id");
                bad_ids += 1;
                row_number as u64
            }
            _ => row_number as u64,
        };
        let mut record = AddressRecord::new(id);
        match (
            number(x_idx, &options.x_column),
            number(y_idx, &options.y_column),
        ) {
            (Ok(Some(x)), Ok(Some(y))) => {
                record.geometry = Some(Point::new(x, y, options.epsg));
            }
            (Err(error), _) | (_, Err(error)) => {
                warn!(%error, "keeping record without geometry");
                bad_coordinates += 1;
            }
            _ => {}
        }
        for (idx, header) in headers.iter().enumerate() {
            if idx == x_idx || idx == y_idx || Some(idx) == id_idx || header.is_empty() {
                continue;
            }
            record.set(header, row.get(idx).unwrap_or(""));
        }
        records.push(record);
    }
    if bad_coordinates > 0 || bad_ids > 0 {
        warn!(
            path = %path.display(),
            bad_coordinates,
            bad_ids,
            "address points with unparsable numeric cells"
        );
    }
    debug!(path = %path.display(), records = records.len(), "address points read");
    Ok(records)
}
