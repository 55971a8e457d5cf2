//! Canonical full street name and full address number synthesis.

use nad_model::{AddressRecord, DomainKind, FieldValue, fields};
use nad_standards::DomainCodec;

/// Join name components with single spaces, skipping blank components and
/// collapsing internal whitespace.
pub fn join_street_name(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .flat_map(|part| part.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a component in its canonical domain form when one exists,
/// otherwise as its trimmed text.
fn canonical_component(codec: &DomainCodec, kind: DomainKind, value: &FieldValue) -> Option<String> {
    codec.canonical(kind, value).or_else(|| value.as_code())
}

/// Build `StNam_Full` from pre-direction, pre-type, name, post-direction and
/// post-type.
///
/// Directions and the post-type render in their canonical long form so the
/// full name agrees with the translated component fields. The field is only
/// written when the value differs; returns the number of records changed.
pub fn synthesize_full_street_names(records: &mut [AddressRecord], codec: &DomainCodec) -> usize {
    let mut changed = 0;
    for record in records.iter_mut() {
        let pre_dir = canonical_component(codec, DomainKind::Direction, record.get(fields::ST_PRE_DIR));
        let post_dir =
            canonical_component(codec, DomainKind::Direction, record.get(fields::ST_POS_DIR));
        let post_type =
            canonical_component(codec, DomainKind::StreetType, record.get(fields::ST_POS_TYP));
        let pre_type = record.get(fields::ST_PRE_TYP).as_code();
        let name = record.get(fields::ST_NAME).as_code();
        let full = join_street_name(&[
            pre_dir.as_deref(),
            pre_type.as_deref(),
            name.as_deref(),
            post_dir.as_deref(),
            post_type.as_deref(),
        ]);
        let value = if full.is_empty() {
            FieldValue::Null
        } else {
            FieldValue::Text(full)
        };
        if record.set(fields::STNAM_FULL, value) {
            changed += 1;
        }
    }
    changed
}

/// Build `AddNo_Full` from `Add_Number` and the optional `AddNum_Suf`.
///
/// Records without a house number are left unchanged.
pub fn synthesize_full_address_numbers(records: &mut [AddressRecord]) -> usize {
    let mut changed = 0;
    for record in records.iter_mut() {
        let Some(number) = record.get(fields::ADD_NUMBER).as_code() else {
            continue;
        };
        let full = match record.text(fields::ADD_NUM_SUF) {
            Some(suffix) => format!("{number} {suffix}"),
            None => number,
        };
        if record.set(fields::ADD_NO_FULL, full) {
            changed += 1;
        }
    }
    changed
}
