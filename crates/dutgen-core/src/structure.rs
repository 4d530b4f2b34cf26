//! Record building for the STRUCT/DUT generator.
//!
//! The first grid row is the header. Logical fields are located by fuzzy
//! alias matching, rows without an integer address are discarded, and only
//! then are names sanitized and claimed, so discarded rows never consume a
//! collision suffix.

use dutgen_map::{AliasConfig, ColumnMap, normalize_header, resolve_columns};
use dutgen_model::{CellValue, Grid, LogicalField, StructRecord};
use tracing::{debug, info, warn};

use crate::BuildError;
use crate::names::{NameRegistry, sanitize_struct_name};

/// Records built from one sheet together with how they were found.
#[derive(Debug, Clone)]
pub struct StructBatch {
    /// Normalized header row.
    pub headers: Vec<String>,
    pub columns: ColumnMap,
    pub records: Vec<StructRecord>,
    /// Data rows dropped for a missing or non-integer address.
    pub skipped_rows: usize,
}

impl StructBatch {
    /// Length of the longest field name in the batch.
    pub fn max_name_len(&self) -> usize {
        self.records
            .iter()
            .map(|record| record.name.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Reads an integer register address.
///
/// Numeric cells must hold a whole number; text must parse as an integer
/// as written, so `"100.0"` is rejected.
pub fn parse_register_address(cell: &CellValue) -> Option<i64> {
    match cell {
        CellValue::Number(value) => {
            let whole = value.is_finite() && value.fract() == 0.0;
            (whole && value.abs() <= i64::MAX as f64).then(|| *value as i64)
        }
        CellValue::Text(text) => text.trim().parse::<i64>().ok(),
        CellValue::Empty => None,
    }
}

fn text_or_default(grid: &Grid, row: usize, columns: &ColumnMap, field: LogicalField) -> String {
    columns
        .index(field)
        .and_then(|column| grid.cell(row, column).to_text())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .or_else(|| field.default_value().map(str::to_string))
        .unwrap_or_default()
}

/// Builds struct records from a grid whose first row is the header.
pub fn build_struct_records(grid: &Grid, aliases: &AliasConfig) -> Result<StructBatch, BuildError> {
    let headers: Vec<String> = (0..grid.width())
        .map(|column| normalize_header(&grid.cell(0, column).to_string()))
        .collect();
    let columns = resolve_columns(aliases, &headers);
    let data_rows = grid.len().saturating_sub(1);

    let address_column = columns.index(LogicalField::Address);
    if address_column.is_none() {
        warn!("no address column resolved; every row will be skipped");
    }

    // Address validation happens before any name is claimed.
    let valid: Vec<(usize, i64)> = (1..grid.len())
        .filter_map(|row| {
            let address = address_column
                .and_then(|column| parse_register_address(grid.cell(row, column)));
            if address.is_none() {
                debug!(row, "skipping row without an integer address");
            }
            address.map(|address| (row, address))
        })
        .collect();

    let mut registry = NameRegistry::new();
    let records: Vec<StructRecord> = valid
        .into_iter()
        .map(|(row, address)| {
            let raw_name = text_or_default(grid, row, &columns, LogicalField::Name);
            StructRecord {
                name: registry.claim(&sanitize_struct_name(&raw_name)),
                address,
                scale: text_or_default(grid, row, &columns, LogicalField::Scale),
                unit: text_or_default(grid, row, &columns, LogicalField::Unit),
                offset: text_or_default(grid, row, &columns, LogicalField::Offset),
            }
        })
        .collect();

    if records.is_empty() {
        return Err(BuildError::NoVariables { data_rows });
    }
    let skipped_rows = data_rows - records.len();
    info!(records = records.len(), skipped_rows, "built struct records");
    Ok(StructBatch {
        headers,
        columns,
        records,
        skipped_rows,
    })
}
