use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use em_cli::report::{format_peak_hours, format_peak_weekdays};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    let pipeline = &result.pipeline;
    println!();
    println!("{}", format_peak_hours(&pipeline.timing));
    println!("{}", format_peak_weekdays(&pipeline.timing));
    println!();

    let mut table = Table::new();
    table.set_header(vec![header_cell("Roster"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(result.input.display()),
    ]);
    table.add_row(vec![Cell::new("Records read"), Cell::new(pipeline.records_read)]);
    table.add_row(vec![Cell::new("Processed"), Cell::new(pipeline.processed)]);
    table.add_row(vec![
        Cell::new("Letters written"),
        match (&result.output_dir, result.dry_run) {
            (_, true) => dim_cell("dry run"),
            (Some(_), false) => Cell::new(pipeline.letters.len()),
            (None, false) => dim_cell("-"),
        },
    ]);
    table.add_row(vec![
        Cell::new("Lookup fallbacks"),
        count_cell(pipeline.lookup_fallbacks, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Skipped"),
        count_cell(pipeline.skipped.len(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Output"),
        match &result.output_dir {
            Some(dir) => Cell::new(dir.display()),
            None => dim_cell("-"),
        },
    ]);
    table.add_row(vec![
        Cell::new("Duration"),
        dim_cell(format!("{} ms", pipeline.duration_ms)),
    ]);
    println!("{table}");
    print_skipped_table(result);
}

fn print_skipped_table(result: &RunResult) {
    let skipped = &result.pipeline.skipped;
    if skipped.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Id"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for record in skipped {
        table.add_row(vec![
            Cell::new(record.line),
            Cell::new(&record.id).fg(Color::Blue),
            Cell::new(&record.reason),
        ]);
    }
    println!();
    println!("Skipped records:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
