use thiserror::Error;

/// Fatal errors while turning a grid into variable records.
///
/// Rows that fail validation are skipped, not reported here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("invalid column letter '{input}' (expected letters such as A, B or AA)")]
    InvalidColumnLetter { input: String },

    #[error("no valid variables found ({data_rows} data rows, none with an integer address)")]
    NoVariables { data_rows: usize },
}
