//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use nad_model::DomainKind;

#[derive(Parser)]
#[command(
    name = "nad-normalize",
    version,
    about = "Normalize jurisdiction address points into the National Address Database schema",
    long_about = "Normalize jurisdiction address points into the National Address Database schema.\n\n\
                  Filters records without a numeric house number, projects fields through the\n\
                  crosswalk, splits highway-style street prefixes, translates coded values and\n\
                  enriches points from tribal, census place and ZIP reference data."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize an address point CSV.
    Run(RunArgs),

    /// List the domain code tables.
    Domains(DomainsArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Address point CSV with `x`/`y` coordinate columns.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Output CSV (default: NAD_AddressPoints<timestamp>.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "CSV")]
    pub output: Option<PathBuf>,

    /// Pipeline configuration JSON.
    #[arg(long = "config", value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Crosswalk rules JSON replacing the built-in field map.
    #[arg(long = "crosswalk", value_name = "JSON")]
    pub crosswalk: Option<PathBuf>,

    /// Region layer for a named source, as NAME=PATH.json. Repeatable.
    #[arg(long = "regions", value_name = "NAME=PATH", value_parser = parse_named_path)]
    pub regions: Vec<(String, PathBuf)>,

    /// Reference table for a named source, as NAME=PATH.csv. Repeatable.
    #[arg(long = "reference", value_name = "NAME=PATH", value_parser = parse_named_path)]
    pub references: Vec<(String, PathBuf)>,

    /// Replace a built-in domain table, as KIND=PATH.csv. Repeatable.
    #[arg(long = "domain-table", value_name = "KIND=PATH", value_parser = parse_domain_table)]
    pub domain_tables: Vec<(DomainKind, PathBuf)>,

    /// Value written to NAD_Source (overrides the config file).
    #[arg(long = "source-label", value_name = "LABEL")]
    pub source_label: Option<String>,

    /// Raw field that must hold a numeric house number (overrides the config file).
    #[arg(long = "key-field", value_name = "FIELD")]
    pub key_field: Option<String>,

    #[arg(long = "id-column", default_value = "OBJECTID")]
    pub id_column: String,

    #[arg(long = "x-column", default_value = "x")]
    pub x_column: String,

    #[arg(long = "y-column", default_value = "y")]
    pub y_column: String,

    /// Run the pipeline and print the summary without writing output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct DomainsArgs {
    /// Print every code and its canonical value for one table.
    #[arg(long = "show", value_name = "KIND", value_parser = parse_domain_kind)]
    pub show: Option<DomainKind>,

    /// Replace a built-in domain table, as KIND=PATH.csv, before listing. Repeatable.
    #[arg(long = "domain-table", value_name = "KIND=PATH", value_parser = parse_domain_table)]
    pub domain_tables: Vec<(DomainKind, PathBuf)>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

pub fn parse_named_path(raw: &str) -> Result<(String, PathBuf), String> {
    let (name, path) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=PATH, got `{raw}`"))?;
    let name = name.trim();
    if name.is_empty() || path.trim().is_empty() {
        return Err(format!("expected NAME=PATH, got `{raw}`"));
    }
    Ok((name.to_string(), PathBuf::from(path.trim())))
}

pub fn parse_domain_kind(raw: &str) -> Result<DomainKind, String> {
    DomainKind::ALL
        .into_iter()
        .find(|kind| kind.as_str().eq_ignore_ascii_case(raw.trim()))
        .ok_or_else(|| {
            let known: Vec<&str> = DomainKind::ALL.iter().map(|k| k.as_str()).collect();
            format!("unknown domain table `{raw}` (expected one of {})", known.join(", "))
        })
}

fn parse_domain_table(raw: &str) -> Result<(DomainKind, PathBuf), String> {
    let (kind, path) = parse_named_path(raw)?;
    Ok((parse_domain_kind(&kind)?, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_paths() {
        assert_eq!(
            parse_named_path("zip_codes=data/zips.csv").unwrap(),
            ("zip_codes".to_string(), PathBuf::from("data/zips.csv"))
        );
        assert!(parse_named_path("zip_codes").is_err());
        assert!(parse_named_path("=zips.csv").is_err());
    }

    #[test]
    fn domain_tables() {
        assert_eq!(parse_domain_kind("street_type").unwrap(), DomainKind::StreetType);
        assert!(parse_domain_kind("zip").is_err());
        let (kind, path) = parse_domain_table("county_fips=fips.csv").unwrap();
        assert_eq!(kind, DomainKind::CountyFips);
        assert_eq!(path, PathBuf::from("fips.csv"));
    }

    #[test]
    fn parses_run_arguments() {
        let cli = Cli::try_parse_from([
            "nad-normalize",
            "run",
            "points.csv",
            "--regions",
            "tribal_lands=tribal.json",
            "--reference",
            "zip_codes=zips.csv",
            "--source-label",
            "County GIS",
            "--dry-run",
        ])
        .unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.input, PathBuf::from("points.csv"));
        assert_eq!(args.regions.len(), 1);
        assert_eq!(args.references[0].0, "zip_codes");
        assert_eq!(args.source_label.as_deref(), Some("County GIS"));
        assert!(args.dry_run);
    }
}
