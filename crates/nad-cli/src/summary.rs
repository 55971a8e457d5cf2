use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use nad_core::RunReport;

use crate::commands::RunResult;

/// One line of the stage summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageRow {
    pub stage: String,
    pub records: usize,
    pub changes: Option<usize>,
}

pub fn stage_rows(report: &RunReport) -> Vec<StageRow> {
    report
        .stages
        .iter()
        .map(|stage| StageRow {
            stage: stage.stage.as_str().to_string(),
            records: stage.records,
            changes: (!stage.skipped).then_some(stage.changes),
        })
        .collect()
}

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    let report = &result.report;

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Records"),
        header_cell("Changes"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in stage_rows(report) {
        table.add_row(vec![
            Cell::new(row.stage).fg(Color::Blue),
            Cell::new(row.records),
            match row.changes {
                Some(count) if count > 0 => Cell::new(count).add_attribute(Attribute::Bold),
                Some(count) => dim_cell(count),
                None => dim_cell("skipped"),
            },
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} / {}", report.output_records, report.input_records))
            .add_attribute(Attribute::Bold),
        count_cell(report.excluded_ids.len(), Color::Yellow),
    ]);
    println!("{table}");

    if !report.joins.is_empty() {
        print_join_table(report);
    }
    if !report.schema_mismatches.is_empty() {
        eprintln!("Missing source fields:");
        for mismatch in &report.schema_mismatches {
            eprintln!(
                "- {} <- {} ({} records)",
                mismatch.target,
                mismatch.sources.join(" | "),
                mismatch.records
            );
        }
    }
}

fn print_join_table(report: &RunReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Target"),
        header_cell("Matched"),
        header_cell("Unmatched"),
        header_cell("Ambiguous"),
    ]);
    apply_table_style(&mut table);
    for column in 2..5 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for join in &report.joins {
        table.add_row(vec![
            Cell::new(&join.source),
            Cell::new(&join.target_field),
            Cell::new(join.stats.matched),
            dim_cell(join.stats.unmatched),
            count_cell(join.stats.ambiguous, Color::Yellow),
        ]);
    }
    println!();
    println!("Enrichment:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
