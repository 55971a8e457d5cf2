use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use nad_cli::cli::{Cli, Command, RunArgs};
use nad_cli::commands::run_normalize;

fn run_args(argv: &[&str]) -> RunArgs {
    let mut full = vec!["nad-normalize", "run"];
    full.extend_from_slice(argv);
    match Cli::try_parse_from(full).unwrap().command {
        Command::Run(args) => args,
        Command::Domains(_) => panic!("expected run"),
    }
}

fn write_inputs(dir: &Path) {
    fs::write(
        dir.join("points.csv"),
        "OBJECTID,AddNum,PrefixDir,StreetName,StreetType,UnitType,CountyID,ZipCode,x,y\n\
         1,123,N,OLD HIGHWAY 89,,  ,49035,84536,-111.75,37.25\n\
         2,12B,S,MAIN,ST,,49035,84536,-111.75,37.25\n\
         3,45,E,US 6,,4B,49049,84601,-100.0,40.0\n",
    )
    .unwrap();
    fs::write(
        dir.join("tribal.json"),
        r#"[{"attributes": {"state_lgd": "Tribal Lands", "tribe": "Navajo"},
             "rings": [[[-112, 37], [-112, 38], [-111, 38], [-111, 37], [-112, 37]]]}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("places.json"),
        r#"[{"attributes": {"LSAD20": "57", "NAMELSAD20": "Oljato-Monument Valley CDP"},
             "rings": [[[-112, 37], [-112, 38], [-111, 38], [-111, 37], [-112, 37]]]}]"#,
    )
    .unwrap();
    fs::write(dir.join("zips.csv"), "ZIP5,NAME\n84536,MONUMENT VALLEY\n").unwrap();
}

#[test]
fn run_writes_normalized_csv() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path());
    let d = |name: &str| dir.path().join(name).display().to_string();
    let regions_tribal = format!("tribal_lands={}", d("tribal.json"));
    let regions_places = format!("census_places={}", d("places.json"));
    let zips = format!("zip_codes={}", d("zips.csv"));
    let input = d("points.csv");
    let output = d("out.csv");

    let args = run_args(&[
        &input,
        "--output",
        &output,
        "--regions",
        &regions_tribal,
        "--regions",
        &regions_places,
        "--reference",
        &zips,
        "--source-label",
        "Test County",
    ]);
    let result = run_normalize(&args).unwrap();

    assert_eq!(result.report.input_records, 3);
    assert_eq!(result.report.output_records, 2);
    assert_eq!(result.report.excluded_ids.len(), 1);

    let mut reader = csv::Reader::from_path(result.output.unwrap()).unwrap();
    let headers = reader.headers().unwrap().clone();
    let col = |name: &str| headers.iter().position(|h| h == name).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);

    let first = &rows[0];
    assert_eq!(&first[col("Add_Number")], "123");
    assert_eq!(&first[col("StNam_Full")], "NORTH OLD HIGHWAY 89");
    assert_eq!(&first[col("County")], "SALT LAKE");
    assert_eq!(&first[col("NatAmArea")], "Navajo Nation Reservation");
    assert_eq!(&first[col("Census_Plc")], "Oljato-Monument Valley CDP");
    assert_eq!(&first[col("Post_City")], "MONUMENT VALLEY");
    assert_eq!(&first[col("NAD_Source")], "Test County");
    assert_eq!(&first[col("Unit")], "");

    let second = &rows[1];
    assert_eq!(&second[col("St_PreTyp")], "US");
    assert_eq!(&second[col("St_Name")], "6");
    assert_eq!(&second[col("StNam_Full")], "EAST US 6");
    assert_eq!(&second[col("County")], "UTAH");
    assert_eq!(&second[col("Unit")], "4B");
    assert_eq!(&second[col("NatAmArea")], "");
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path());
    let input = dir.path().join("points.csv").display().to_string();
    let config = dir.path().join("config.json");
    fs::write(
        &config,
        r#"{"region_enrichments": [], "exact_key_enrichments": [], "source_locations": {}}"#,
    )
    .unwrap();
    let config = config.display().to_string();

    let args = run_args(&[&input, "--config", &config, "--dry-run"]);
    let result = run_normalize(&args).unwrap();

    assert!(result.output.is_none());
    assert_eq!(result.report.output_records, 2);
    let written = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("NAD_AddressPoints"))
        .count();
    assert_eq!(written, 0);
}

#[test]
fn missing_reference_data_fails_the_run() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path());
    let input = dir.path().join("points.csv").display().to_string();

    let args = run_args(&[&input, "--dry-run"]);
    let error = run_normalize(&args).unwrap_err();
    assert!(format!("{error:#}").contains("tribal_lands"));
}
