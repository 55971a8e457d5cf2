use std::fs::File;
use std::io::Write;
use std::path::Path;

use nad_model::{AddressRecord, fields::NAD_FIELD_ORDER};

use crate::error::IngestError;

/// Write records as CSV in NAD column order. Nulls are written as empty
/// cells. Returns the number of rows written.
pub fn write_records<W: Write>(writer: W, records: &[AddressRecord]) -> csv::Result<usize> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(NAD_FIELD_ORDER)?;
    for record in records {
        out.write_record(
            NAD_FIELD_ORDER
                .iter()
                .map(|name| record.get(name).to_string()),
        )?;
    }
    out.flush()?;
    Ok(records.len())
}

pub fn write_records_csv(path: &Path, records: &[AddressRecord]) -> Result<usize, IngestError> {
    let file = File::create(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_records(file, records).map_err(|source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    })
}
