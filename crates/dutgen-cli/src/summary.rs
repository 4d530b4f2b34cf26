use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{GeneratedSheet, MappingResult, SheetOutcome, StructResult};

pub fn print_mapping_summary(result: &MappingResult) {
    println!("File: {}", result.file.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Variables"),
        header_cell("Skipped"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        sheet_cell(&result.sheet),
        Cell::new(result.records),
        count_cell(result.skipped_rows, Color::Yellow),
        output_cell(result.output.as_deref()),
    ]);
    println!("{table}");
}

pub fn print_struct_summary(result: &StructResult) {
    println!("File: {}", result.file.display());
    println!("Output: {}", result.output_dir.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("DUT"),
        header_cell("Fields"),
        header_cell("Skipped"),
        header_cell("Columns"),
        header_cell("Outputs"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut total_fields = 0usize;
    let mut total_skipped = 0usize;
    let mut failures = Vec::new();
    for summary in &result.sheets {
        match &summary.outcome {
            SheetOutcome::Generated(sheet) => {
                total_fields += sheet.records;
                total_skipped += sheet.skipped_rows;
                table.add_row(generated_row(&summary.sheet, sheet));
            }
            SheetOutcome::Failed(message) => {
                failures.push((summary.sheet.as_str(), message.as_str()));
                table.add_row(vec![
                    sheet_cell(&summary.sheet),
                    Cell::new("FAILED")
                        .fg(Color::Red)
                        .add_attribute(Attribute::Bold),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                ]);
            }
        }
    }
    if result.sheets.len() > 1 {
        table.add_row(vec![
            Cell::new("TOTAL")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            dim_cell("-"),
            Cell::new(total_fields).add_attribute(Attribute::Bold),
            count_cell(total_skipped, Color::Yellow).add_attribute(Attribute::Bold),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    println!("{table}");

    if !failures.is_empty() {
        eprintln!("Errors:");
        for (sheet, message) in failures {
            eprintln!("- {sheet}: {message}");
        }
    }
}

fn generated_row(sheet: &str, generated: &GeneratedSheet) -> Vec<Cell> {
    let columns = if generated.columns.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(
            generated
                .columns
                .iter()
                .map(|(field, header)| format!("{field} <- {header}"))
                .collect::<Vec<_>>()
                .join("\n"),
        )
    };
    let outputs = match &generated.outputs {
        Some(paths) => Cell::new(format!(
            "{}\n{}",
            file_name(&paths.text),
            file_name(&paths.tcdut)
        ))
        .fg(Color::Green),
        None => dim_cell("dry run"),
    };
    vec![
        sheet_cell(sheet),
        Cell::new(&generated.dut_name),
        Cell::new(generated.records),
        count_cell(generated.skipped_rows, Color::Yellow),
        columns,
        outputs,
    ]
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn output_cell(path: Option<&Path>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
        None => dim_cell("dry run"),
    }
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
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
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

fn sheet_cell(sheet: &str) -> Cell {
    Cell::new(sheet)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
