//! Blank-to-null cleanup.

use nad_model::{AddressRecord, FieldValue};

/// Replace empty or whitespace-only text in `field_names` with null.
///
/// Only fields present on a record are touched. Safe to re-run; returns the
/// number of values nulled.
pub fn blanks_to_nulls(records: &mut [AddressRecord], field_names: &[&str]) -> usize {
    let mut changed = 0;
    for record in records.iter_mut() {
        for name in field_names {
            let blank_text = matches!(record.get(name), FieldValue::Text(value) if value.trim().is_empty());
            if blank_text && record.set(name, FieldValue::Null) {
                changed += 1;
            }
        }
    }
    changed
}
