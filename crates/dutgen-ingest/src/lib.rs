#![deny(unsafe_code)]

pub mod csv_grid;
pub mod error;
pub mod source;
pub mod workbook;

pub use csv_grid::{CSV_SHEET_NAME, read_csv_grid};
pub use error::IngestError;
pub use source::{SourceKind, file_stem, list_sheets, read_grid};
pub use workbook::{list_workbook_sheets, read_workbook_grid};
