//! Input-format dispatch on file extension.

use std::path::Path;

use dutgen_model::Grid;

use crate::IngestError;
use crate::csv_grid::{CSV_SHEET_NAME, read_csv_grid};
use crate::workbook::{list_workbook_sheets, read_workbook_grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Csv,
    Workbook,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Self::Workbook),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

fn ensure_exists(path: &Path) -> Result<(), IngestError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(IngestError::NotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Lists the sheets of an input file. CSV files have exactly one.
pub fn list_sheets(path: &Path) -> Result<Vec<String>, IngestError> {
    ensure_exists(path)?;
    match SourceKind::from_path(path)? {
        SourceKind::Csv => Ok(vec![CSV_SHEET_NAME.to_string()]),
        SourceKind::Workbook => list_workbook_sheets(path),
    }
}

/// Loads one sheet of an input file as a raw grid.
pub fn read_grid(path: &Path, sheet: &str) -> Result<Grid, IngestError> {
    ensure_exists(path)?;
    match SourceKind::from_path(path)? {
        SourceKind::Csv => {
            if sheet != CSV_SHEET_NAME {
                return Err(IngestError::SheetNotFound {
                    path: path.to_path_buf(),
                    sheet: sheet.to_string(),
                });
            }
            read_csv_grid(path)
        }
        SourceKind::Workbook => read_workbook_grid(path, sheet),
    }
}

/// File name without directory or extension, used to name generated artifacts.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
