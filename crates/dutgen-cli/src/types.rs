use std::path::PathBuf;

use dutgen_model::LogicalField;
use dutgen_report::StructOutputPaths;

#[derive(Debug)]
pub struct MappingResult {
    pub file: PathBuf,
    pub sheet: String,
    pub records: usize,
    pub skipped_rows: usize,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct StructResult {
    pub file: PathBuf,
    pub output_dir: PathBuf,
    pub sheets: Vec<SheetSummary>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct SheetSummary {
    pub sheet: String,
    pub outcome: SheetOutcome,
}

#[derive(Debug)]
pub enum SheetOutcome {
    Generated(GeneratedSheet),
    Failed(String),
}

#[derive(Debug)]
pub struct GeneratedSheet {
    pub dut_name: String,
    pub records: usize,
    pub skipped_rows: usize,
    /// Resolved field and the header it matched.
    pub columns: Vec<(LogicalField, String)>,
    /// `None` on a dry run.
    pub outputs: Option<StructOutputPaths>,
}
