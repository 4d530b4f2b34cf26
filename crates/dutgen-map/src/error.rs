#![deny(unsafe_code)]

use std::path::PathBuf;

/// Errors raised while loading the header alias configuration.
///
/// Any of these prevents struct generation from starting.
#[derive(Debug, thiserror::Error)]
pub enum AliasConfigError {
    #[error("failed to read alias configuration {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse alias configuration {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("alias configuration {path} defines no known field (expected one of: {expected})")]
    Empty { path: PathBuf, expected: String },
}
