use nad_model::{AddressRecord, CoordinateAccessor, FieldValue, GeometryAccessor, Point, fields};

#[test]
fn absent_fields_read_as_null() {
    let record = AddressRecord::new(1);
    assert!(record.get(fields::UNIT).is_null());
    assert!(!record.contains(fields::UNIT));
    assert_eq!(record.text(fields::UNIT), None);
}

#[test]
fn set_reports_changes() {
    let mut record = AddressRecord::new(1).with_field(fields::UNIT, "4B");
    assert!(!record.set(fields::UNIT, "4B"));
    assert!(record.set(fields::UNIT, FieldValue::Null));
    assert!(record.contains(fields::UNIT));
    assert!(record.set(fields::BUILDING, "A"));
    assert_eq!(record.text(fields::BUILDING), Some("A"));
}

#[test]
fn field_names_are_sorted() {
    let record = AddressRecord::new(1)
        .with_field("b", "2")
        .with_field("a", "1");
    let names: Vec<&str> = record.field_names().collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn geometry_accessor_requires_wgs84() {
    let accessor = GeometryAccessor;
    let geographic = AddressRecord::new(1).with_geometry(Point::wgs84(-111.89, 40.76));
    assert_eq!(accessor.lon_lat(&geographic), Some((-111.89, 40.76)));

    let projected = AddressRecord::new(2).with_geometry(Point::new(-12_455_000.0, 4_977_000.0, 3857));
    assert_eq!(accessor.lon_lat(&projected), None);
    assert_eq!(accessor.lon_lat(&AddressRecord::new(3)), None);
}
