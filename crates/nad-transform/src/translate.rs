//! Domain code translation over record fields.

use nad_model::{AddressRecord, DomainKind, FieldValue, fields};
use nad_standards::DomainCodec;
use tracing::debug;

/// Fields translated through a domain table, and the table used for each.
pub const TRANSLATED_FIELDS: &[(&str, DomainKind)] = &[
    (fields::ST_PRE_DIR, DomainKind::Direction),
    (fields::ST_POS_DIR, DomainKind::Direction),
    (fields::ST_POS_TYP, DomainKind::StreetType),
    (fields::COUNTY, DomainKind::CountyFips),
    (fields::NAT_AM_AREA, DomainKind::TribalArea),
];

/// Translate coded fields to their canonical values.
///
/// Unmapped codes become null. Values that are already canonical are kept,
/// so the pass can be re-run. Fields absent from a record are not added.
/// Returns the number of values changed.
pub fn translate_domain_fields(records: &mut [AddressRecord], codec: &DomainCodec) -> usize {
    let mut changed = 0;
    let mut unmapped = 0;
    for record in records.iter_mut() {
        for (name, kind) in TRANSLATED_FIELDS {
            if !record.contains(name) {
                continue;
            }
            let current = record.get(name);
            let canonical = codec.canonical(*kind, current);
            if canonical.is_none() && !current.is_blank() {
                unmapped += 1;
            }
            if record.set(name, FieldValue::from(canonical)) {
                changed += 1;
            }
        }
    }
    if unmapped > 0 {
        debug!(unmapped, "unmapped domain codes set to null");
    }
    changed
}

#[cfg(test)]
mod tests {
    use nad_standards::load_default_codec;

    use super::*;

    #[test]
    fn translates_and_nulls_unmapped_codes() {
        let codec = load_default_codec().unwrap();
        let mut records = vec![
            AddressRecord::new(1)
                .with_field(fields::ST_PRE_DIR, "N")
                .with_field(fields::ST_POS_TYP, "AVE")
                .with_field(fields::COUNTY, 49035_i64),
            AddressRecord::new(2)
                .with_field(fields::ST_POS_DIR, "Q")
                .with_field(fields::COUNTY, "99999"),
        ];
        assert_eq!(translate_domain_fields(&mut records, &codec), 5);
        assert_eq!(records[0].text(fields::ST_PRE_DIR), Some("NORTH"));
        assert_eq!(records[0].text(fields::ST_POS_TYP), Some("AVENUE"));
        assert_eq!(records[0].text(fields::COUNTY), Some("SALT LAKE"));
        assert!(records[1].get(fields::ST_POS_DIR).is_null());
        assert!(records[1].get(fields::COUNTY).is_null());
        assert!(!records[1].contains(fields::NAT_AM_AREA));

        assert_eq!(translate_domain_fields(&mut records, &codec), 0);
        assert_eq!(records[0].text(fields::COUNTY), Some("SALT LAKE"));
    }
}
