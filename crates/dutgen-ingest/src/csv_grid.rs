use std::path::Path;

use csv::ReaderBuilder;
use dutgen_model::{CellValue, Grid};
use tracing::debug;

use crate::IngestError;

/// The single sheet a CSV file exposes.
pub const CSV_SHEET_NAME: &str = "Sheet1";

fn normalize_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim_matches('\u{feff}');
    if trimmed.trim().is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(trimmed.to_string())
    }
}

/// Reads a CSV file into a grid. No row is treated as a header.
pub fn read_csv_grid(path: &Path) -> Result<Grid, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::csv(path, source))?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::csv(path, source))?;
        let row: Vec<CellValue> = record.iter().map(normalize_cell).collect();
        if row.iter().all(CellValue::is_blank) {
            continue;
        }
        rows.push(row);
    }
    debug!(path = %path.display(), rows = rows.len(), "read csv grid");
    Ok(Grid::new(rows))
}
