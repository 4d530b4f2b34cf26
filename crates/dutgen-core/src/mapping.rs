//! Record building for the flat Modbus mapping list.
//!
//! Columns are chosen by the user as letters, so no header row exists: every
//! grid row is a candidate. Rows whose type does not normalize are dropped
//! before names are claimed.

use dutgen_model::{CellValue, Grid, MappingRecord};
use tracing::{debug, info};

use crate::names::{NameRegistry, sanitize_mapping_name};
use crate::types::normalize_type;
use crate::{BuildError, column_letter_to_index};

/// 0-based column indices for the mapping list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingColumns {
    pub name: usize,
    pub data_type: usize,
    pub address: usize,
    /// Free-text comment column; when absent every row gets the fixed comment.
    pub information: Option<usize>,
}

impl MappingColumns {
    /// Builds the column set from spreadsheet letters.
    ///
    /// A blank information letter means "no information column".
    pub fn from_letters(
        name: &str,
        data_type: &str,
        address: &str,
        information: Option<&str>,
    ) -> Result<Self, BuildError> {
        let information = match information.map(str::trim) {
            Some(letter) if !letter.is_empty() => Some(column_letter_to_index(letter)?),
            _ => None,
        };
        Ok(Self {
            name: column_letter_to_index(name)?,
            data_type: column_letter_to_index(data_type)?,
            address: column_letter_to_index(address)?,
            information,
        })
    }
}

/// Options for one mapping-list run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingOptions {
    pub columns: MappingColumns,
    /// Comment used for every row when no information column is given.
    pub fixed_comment: String,
}

impl MappingOptions {
    pub fn new(columns: MappingColumns) -> Self {
        Self {
            columns,
            fixed_comment: String::new(),
        }
    }

    #[must_use]
    pub fn with_fixed_comment(mut self, comment: impl Into<String>) -> Self {
        self.fixed_comment = comment.into();
        self
    }
}

/// Records built from one sheet, in row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingBatch {
    pub records: Vec<MappingRecord>,
    /// Rows dropped because their type did not normalize.
    pub skipped_rows: usize,
}

/// Reads a register address cell; `None` for blanks and non-numeric text.
pub fn parse_address(cell: &CellValue) -> Option<f64> {
    let value = match cell {
        CellValue::Number(value) => *value,
        CellValue::Text(text) => text.trim().parse::<f64>().ok()?,
        CellValue::Empty => return None,
    };
    value.is_finite().then_some(value)
}

/// Builds mapping records from every row of the grid.
///
/// A chosen column past the sheet's used range reads as empty cells, so a
/// never-filled information column yields empty comments.
pub fn build_mapping_records(grid: &Grid, options: &MappingOptions) -> MappingBatch {
    let columns = options.columns;

    let mut registry = NameRegistry::new();
    let mut batch = MappingBatch::default();
    for row in 0..grid.len() {
        let data_type = normalize_type(grid.cell(row, columns.data_type));
        if !data_type.is_known() {
            debug!(row, "skipping row with unknown data type");
            batch.skipped_rows += 1;
            continue;
        }
        let raw_name = grid.cell(row, columns.name).to_string();
        let name = registry.claim(&sanitize_mapping_name(&raw_name));
        let information = match columns.information {
            Some(column) => grid
                .cell(row, column)
                .to_text()
                .map(|text| text.trim().to_string())
                .unwrap_or_default(),
            None => options.fixed_comment.clone(),
        };
        batch.records.push(MappingRecord {
            name,
            data_type,
            address: parse_address(grid.cell(row, columns.address)),
            information,
        });
    }
    info!(
        records = batch.records.len(),
        skipped_rows = batch.skipped_rows,
        "built mapping records"
    );
    batch
}
