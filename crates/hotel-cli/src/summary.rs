use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hotel_core::{BatchReport, HandlerOutcome};

pub fn print_outcome(outcome: &HandlerOutcome) {
    match outcome {
        HandlerOutcome::Skipped { key, reason } => {
            println!("Skipped: {key}");
            println!("{}", reason.message());
        }
        HandlerOutcome::NoCsvFiles { prefix } => {
            println!("No CSV files under {prefix}");
        }
        HandlerOutcome::Processed(report) => print_report(report),
    }
}

fn print_report(report: &BatchReport) {
    println!("Batch: {}", report.batch_name);
    println!("Ingested at: {}", report.ingested_at);
    println!("Sources: {}", report.source_keys.len());
    let verb = if report.uploaded { "Wrote" } else { "Would write" };
    println!(
        "{verb}: s3://{}/{} ({} bytes)",
        report.bucket, report.processed_key, report.processed_bytes
    );
    println!(
        "{verb}: s3://{}/{} ({} bytes)",
        report.bucket, report.rejected_key, report.rejected_bytes
    );

    let summary = &report.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Valid").fg(Color::Green),
        Cell::new(summary.valid_rows),
    ]);
    table.add_row(vec![
        Cell::new("Invalid").fg(Color::Red),
        count_cell(summary.invalid_rows, Color::Red),
    ]);
    for entry in &summary.rejections {
        table.add_row(vec![
            dim_cell(format!("  {}", entry.rule.label())),
            count_cell(entry.rows, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
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
        .set_width(80);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
