use nad_model::{AddressRecord, FieldValue};

/// Set `field` to `value` on every record. Returns the number of records
/// whose value changed.
pub fn apply_constant(records: &mut [AddressRecord], field: &str, value: &str) -> usize {
    let mut changed = 0;
    for record in records.iter_mut() {
        if record.set(field, FieldValue::text(value)) {
            changed += 1;
        }
    }
    changed
}
