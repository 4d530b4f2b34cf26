#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("input file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("unsupported input format: {path} (expected .csv, .xlsx, .xlsm, .xlsb, .xls or .ods)")]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to open workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("sheet '{sheet}' not found in {path}")]
    SheetNotFound { path: PathBuf, sheet: String },
}

impl IngestError {
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn workbook(path: impl Into<PathBuf>, source: calamine::Error) -> Self {
        Self::Workbook {
            path: path.into(),
            source,
        }
    }
}
