//! Workbook sheets (xlsx, xlsm, xlsb, xls, ods) via `calamine`.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use dutgen_model::{CellValue, Grid};
use tracing::debug;

use crate::IngestError;

/// Lists sheet names in workbook order.
pub fn list_workbook_sheets(path: &Path) -> Result<Vec<String>, IngestError> {
    let workbook = open_workbook_auto(path).map_err(|source| IngestError::workbook(path, source))?;
    Ok(workbook.sheet_names())
}

/// Reads one sheet into a grid.
///
/// The used range of a sheet may start past column A; it is padded on the
/// left so that column indices stay absolute.
pub fn read_workbook_grid(path: &Path, sheet: &str) -> Result<Grid, IngestError> {
    let mut workbook =
        open_workbook_auto(path).map_err(|source| IngestError::workbook(path, source))?;
    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(IngestError::SheetNotFound {
            path: path.to_path_buf(),
            sheet: sheet.to_string(),
        });
    }
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|source| IngestError::workbook(path, source))?;
    let first_column = range.start().map_or(0, |(_, column)| column as usize);

    let mut rows = Vec::new();
    for cells in range.rows() {
        let mut row = vec![CellValue::Empty; first_column];
        row.extend(cells.iter().map(convert_cell));
        if row.iter().all(CellValue::is_blank) {
            continue;
        }
        rows.push(row);
    }
    debug!(path = %path.display(), sheet, rows = rows.len(), "read workbook grid");
    Ok(Grid::new(rows))
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Float(value) => CellValue::Number(*value),
        Data::String(text) if text.trim().is_empty() => CellValue::Empty,
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Bool(value) => CellValue::Text(if *value { "True" } else { "False" }.to_string()),
        Data::DateTime(value) => CellValue::Number(value.as_f64()),
        Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::Text(text.clone()),
        Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}
