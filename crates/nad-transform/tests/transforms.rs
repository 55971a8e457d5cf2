use nad_model::{AddressRecord, FieldValue, GeometryAccessor, Point, fields};
use nad_standards::load_default_codec;
use nad_transform::{
    apply_constant, blanks_to_nulls, decompose_street_names, project_coordinates,
    synthesize_full_address_numbers, synthesize_full_street_names, translate_domain_fields,
};

fn raw_record() -> AddressRecord {
    AddressRecord::new(7)
        .with_geometry(Point::wgs84(-111.875, 40.5))
        .with_field(fields::ADD_NUMBER, 123_i64)
        .with_field(fields::ST_PRE_DIR, "N")
        .with_field(fields::ST_NAME, "OLD HIGHWAY 89")
        .with_field(fields::ST_POS_TYP, "")
        .with_field(fields::UNIT, "  ")
        .with_field(fields::BUILDING, "4B")
        .with_field(fields::COUNTY, "49035")
}

fn run_transforms(records: &mut [AddressRecord]) -> usize {
    let codec = load_default_codec().unwrap();
    project_coordinates(records, &GeometryAccessor, 6)
        + apply_constant(records, fields::NAD_SOURCE, "UGRC")
        + decompose_street_names(records)
        + synthesize_full_street_names(records, &codec)
        + synthesize_full_address_numbers(records)
        + blanks_to_nulls(records, fields::BLANK_TO_NULL_FIELDS)
        + translate_domain_fields(records, &codec)
}

#[test]
fn transforms_compose_in_stage_order() {
    let mut records = vec![raw_record()];
    assert!(run_transforms(&mut records) > 0);

    let record = &records[0];
    assert_eq!(record.text(fields::ST_PRE_DIR), Some("NORTH"));
    assert_eq!(record.text(fields::ST_PRE_TYP), Some("OLD HIGHWAY"));
    assert_eq!(record.text(fields::ST_NAME), Some("89"));
    assert_eq!(record.text(fields::STNAM_FULL), Some("NORTH OLD HIGHWAY 89"));
    assert_eq!(record.text(fields::ADD_NO_FULL), Some("123"));
    assert_eq!(record.text(fields::COUNTY), Some("SALT LAKE"));
    assert_eq!(record.text(fields::NAD_SOURCE), Some("UGRC"));
    assert_eq!(record.text(fields::ADDR_POINT), Some("-111.875 40.5"));
    assert!(record.get(fields::UNIT).is_null());
    assert!(record.get(fields::ST_POS_TYP).is_null());
    assert_eq!(record.get(fields::BUILDING), &FieldValue::from("4B"));
}

#[test]
fn second_pass_changes_nothing() {
    let mut records = vec![raw_record(), AddressRecord::new(8)];
    run_transforms(&mut records);
    let snapshot = records.clone();

    assert_eq!(run_transforms(&mut records), 0);
    assert_eq!(records, snapshot);
}
