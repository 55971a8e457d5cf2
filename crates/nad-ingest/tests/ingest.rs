use std::fs;

use nad_ingest::{
    IngestError, PointCsvOptions, read_address_points, read_reference_csv, register_location,
    resolve_location, write_records, write_records_csv,
};
use nad_model::{AddressRecord, FieldValue, NadError, fields};
use nad_spatial::SourceRegistry;
use tempfile::TempDir;

#[test]
fn reads_points_with_geometry_and_ids() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("points.csv");
    fs::write(
        &path,
        "\u{feff}OBJECTID,AddNum,StreetName,x,y\n17,123,MAIN,-111.5,40.25\n18,12B,STATE,,\n",
    )
    .unwrap();

    let records = read_address_points(&path, &PointCsvOptions::default()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id.get(), 17);
    let point = records[0].geometry.unwrap();
    assert_eq!((point.x, point.y, point.epsg), (-111.5, 40.25, 4326));
    assert_eq!(records[0].text("StreetName"), Some("MAIN"));
    assert!(!records[0].contains("x"));
    assert!(!records[0].contains("OBJECTID"));
    assert!(records[1].geometry.is_none());
    assert_eq!(records[1].text("AddNum"), Some("12B"));
}

#[test]
fn bad_coordinates_keep_the_record_without_geometry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(
        &path,
        "OBJECTID,AddNum,x,y\n1,12,-111.5,40.2\n2,13,N/A,40.2\n3,14,-111.5,abc\n",
    )
    .unwrap();
    let records = read_address_points(&path, &PointCsvOptions::default()).unwrap();
    assert_eq!(records.len(), 3);
    assert!(records[0].geometry.is_some());
    assert!(records[1].geometry.is_none());
    assert!(records[2].geometry.is_none());
    assert_eq!(records[1].text("AddNum"), Some("13"));
}

#[test]
fn non_numeric_ids_fall_back_to_row_number() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ids.csv");
    fs::write(
        &path,
        "OBJECTID,AddNum,x,y\nA1,12,-111.5,40.2\n40,13,-111.5,40.2\n-3,14,0,0\n,15,0,0\n",
    )
    .unwrap();
    let records = read_address_points(&path, &PointCsvOptions::default()).unwrap();
    let ids: Vec<u64> = records.iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, vec![1, 40, 3, 4]);
    assert!(records[0].geometry.is_some());
}

#[test]
fn missing_coordinate_columns_are_errors() {
    let dir = TempDir::new().unwrap();

    let missing = dir.path().join("missing.csv");
    fs::write(&missing, "AddNum,lon,lat\n1,2,3\n").unwrap();
    let err = read_address_points(&missing, &PointCsvOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::MissingColumn { ref column, .. } if column == "x"));
}

#[test]
fn rows_are_numbered_without_an_id_column() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("points.csv");
    fs::write(&path, "AddNum,x,y\n1,0,0\n2,0,0\n").unwrap();
    let records = read_address_points(&path, &PointCsvOptions::default()).unwrap();
    let ids: Vec<u64> = records.iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn reference_cells_are_trimmed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zips.csv");
    fs::write(&path, "ZIP5,NAME\n 84101 , SALT LAKE CITY\n84102,\n").unwrap();
    let table = read_reference_csv(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0]["ZIP5"], FieldValue::from("84101"));
    assert_eq!(table.rows()[0]["NAME"], FieldValue::from("SALT LAKE CITY"));
    assert!(table.rows()[1]["NAME"].is_null());
}

#[test]
fn registers_sources_by_extension() {
    let dir = TempDir::new().unwrap();
    let regions = dir.path().join("places.json");
    fs::write(
        &regions,
        r#"[{"attributes": {"NAMELSAD20": "Kanab city"}, "rings": [[[0,0],[0,1],[1,1],[1,0],[0,0]]]}]"#,
    )
    .unwrap();
    let zips = dir.path().join("zips.csv");
    fs::write(&zips, "ZIP5,NAME\n84741,KANAB\n").unwrap();

    let mut registry = SourceRegistry::new();
    register_location(&mut registry, "census_places", regions.to_str().unwrap()).unwrap();
    register_location(&mut registry, "zip_codes", zips.to_str().unwrap()).unwrap();
    assert_eq!(registry.fetch_region("census_places").unwrap().len(), 1);
    assert_eq!(registry.fetch_reference("zip_codes").unwrap().len(), 1);

    let err = register_location(&mut registry, "x", "data.shp").unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat(_)));
}

#[test]
fn remote_locations_are_rejected() {
    let err = resolve_location("https://services1.arcgis.com/x/FeatureServer/0").unwrap_err();
    assert!(matches!(err, IngestError::RemoteLocation(_)));
    assert!(resolve_location(" ./zips.csv ").is_ok());
}

#[test]
fn unreadable_source_reports_its_name() {
    let mut registry = SourceRegistry::new();
    register_location(&mut registry, "tribal_lands", "/nonexistent/tribal.json").unwrap();
    let err = registry.fetch_region("tribal_lands").unwrap_err();
    assert!(matches!(
        err,
        NadError::ExternalSourceUnavailable { ref source_name, .. } if source_name == "tribal_lands"
    ));
}

#[test]
fn writes_nad_columns_in_order() {
    let records = vec![
        AddressRecord::new(1)
            .with_field(fields::ADD_NUMBER, 123_i64)
            .with_field(fields::ST_NAME, "MAIN")
            .with_field(fields::UNIT, FieldValue::Null)
            .with_field(fields::LONGITUDE, -111.5),
    ];
    let mut buf = Vec::new();
    assert_eq!(write_records(&mut buf, &records).unwrap(), 1);
    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("Add_Number,AddNum_Suf,AddNo_Full,St_PreDir"));
    let row: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(row[0], "123");
    assert_eq!(row[5], "MAIN");
    assert_eq!(row[21], "-111.5");
    assert_eq!(row[10], "");

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    assert_eq!(write_records_csv(&path, &records).unwrap(), 1);
    assert!(fs::read_to_string(&path).unwrap().contains("MAIN"));
}
