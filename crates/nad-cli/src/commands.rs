use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use nad_core::{RunReport, run_pipeline};
use nad_ingest::{
    CsvReferenceSource, JsonRegionSource, PointCsvOptions, read_address_points,
    register_location, write_records_csv,
};
use nad_map::{FieldCrosswalk, default_nad_crosswalk};
use nad_model::{DomainKind, PipelineConfig};
use nad_spatial::SourceRegistry;
use nad_standards::{DomainCodec, load_codec_with_overrides};

use crate::cli::{DomainsArgs, RunArgs};
use crate::summary::apply_table_style;

/// Outcome of `nad-normalize run`.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    /// `None` for a dry run.
    pub output: Option<PathBuf>,
    pub report: RunReport,
}

/// `NAD_AddressPoints<YYYYMMDD_HHMMSS>.csv`.
pub fn default_output_name(now: DateTime<Local>) -> String {
    format!("NAD_AddressPoints{}.csv", now.format("%Y%m%d_%H%M%S"))
}

pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };
    let file = File::open(path).with_context(|| format!("open config {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse config {}", path.display()))
}

/// Built-in domain tables with any `KIND=PATH` replacements applied.
fn load_codec(domain_tables: &[(DomainKind, PathBuf)]) -> Result<DomainCodec> {
    let overrides: Vec<(DomainKind, &Path)> = domain_tables
        .iter()
        .map(|(kind, path)| (*kind, path.as_path()))
        .collect();
    load_codec_with_overrides(&overrides).context("load domain tables")
}

fn load_crosswalk(path: Option<&Path>) -> Result<FieldCrosswalk> {
    let crosswalk = match path {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("open crosswalk {}", path.display()))?;
            FieldCrosswalk::from_json_reader(BufReader::new(file))
        }
        None => default_nad_crosswalk(),
    };
    crosswalk.context("build crosswalk")
}

/// Sources given on the command line, then any local `source_locations`
/// from the config for names still missing.
fn build_registry(args: &RunArgs, config: &PipelineConfig) -> SourceRegistry {
    let mut registry = SourceRegistry::new();
    for (name, path) in &args.regions {
        registry.register_region(name.as_str(), Box::new(JsonRegionSource::new(name.as_str(), path)));
    }
    for (name, path) in &args.references {
        registry.register_reference(name.as_str(), Box::new(CsvReferenceSource::new(path)));
    }
    for (name, location) in &config.source_locations {
        if registry.has_region(name) || registry.has_reference(name) {
            continue;
        }
        if let Err(error) = register_location(&mut registry, name, location) {
            warn!(source = %name, %error, "source location not usable");
        }
    }
    registry
}

pub fn run_normalize(args: &RunArgs) -> Result<RunResult> {
    let span = info_span!("run", input = %args.input.display());
    let _guard = span.enter();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(label) = &args.source_label {
        config.source_label = label.clone();
    }
    if let Some(field) = &args.key_field {
        config.key_field = field.clone();
    }

    let codec = load_codec(&args.domain_tables)?;
    let crosswalk = load_crosswalk(args.crosswalk.as_deref())?;
    let sources = build_registry(args, &config);

    let options = PointCsvOptions {
        id_column: args.id_column.clone(),
        x_column: args.x_column.clone(),
        y_column: args.y_column.clone(),
        ..PointCsvOptions::default()
    };
    let input = read_address_points(&args.input, &options)
        .with_context(|| format!("read address points {}", args.input.display()))?;

    let output = run_pipeline(input, &codec, &crosswalk, &sources, &config)?;

    let output_path = if args.dry_run {
        None
    } else {
        let path = args.output.clone().unwrap_or_else(|| {
            let dir = args.input.parent().unwrap_or_else(|| Path::new("."));
            dir.join(default_output_name(Local::now()))
        });
        let written = write_records_csv(&path, &output.records)
            .with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), records = written, "output written");
        Some(path)
    };

    Ok(RunResult {
        input: args.input.clone(),
        output: output_path,
        report: output.report,
    })
}

/// Table listing for `nad-normalize domains`.
pub fn domains_table(args: &DomainsArgs) -> Result<Table> {
    let codec = load_codec(&args.domain_tables)?;
    let mut table = Table::new();
    match args.show {
        Some(kind) => {
            table.set_header(vec!["Code", "Value"]);
            apply_table_style(&mut table);
            if let Some(domain) = codec.table(kind) {
                for (code, value) in domain.entries() {
                    table.add_row(vec![code, value]);
                }
            }
        }
        None => {
            table.set_header(vec!["Table", "Entries", "Description"]);
            apply_table_style(&mut table);
            for domain in codec.tables() {
                table.add_row(vec![
                    domain.kind().as_str().to_string(),
                    domain.len().to_string(),
                    domain.kind().description().to_string(),
                ]);
            }
        }
    }
    Ok(table)
}

pub fn run_domains(args: &DomainsArgs) -> Result<()> {
    let table = domains_table(args)?;
    println!("{table}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn output_name_is_timestamped() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(default_output_name(now), "NAD_AddressPoints20240309_140507.csv");
    }

    #[test]
    fn missing_config_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), PipelineConfig::default());
    }

    #[test]
    fn domains_lists_replaced_tables() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("directions.csv");
        std::fs::write(&path, "Code,Value\nNB,NORTHBOUND\nSB,SOUTHBOUND\n").unwrap();

        let builtin = domains_table(&DomainsArgs {
            show: Some(DomainKind::Direction),
            domain_tables: Vec::new(),
        })
        .unwrap()
        .to_string();
        assert!(builtin.contains("NORTH"));
        assert!(!builtin.contains("NORTHBOUND"));

        let replaced = domains_table(&DomainsArgs {
            show: Some(DomainKind::Direction),
            domain_tables: vec![(DomainKind::Direction, path.clone())],
        })
        .unwrap()
        .to_string();
        assert!(replaced.contains("NORTHBOUND"));
        assert!(!replaced.contains("WEST"));

        let summary = domains_table(&DomainsArgs {
            show: None,
            domain_tables: vec![(DomainKind::Direction, path)],
        })
        .unwrap();
        assert_eq!(summary.row_count(), DomainKind::ALL.len());
    }
}
