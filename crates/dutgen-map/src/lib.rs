#![deny(unsafe_code)]

pub mod aliases;
pub mod error;
pub mod paths;
pub mod resolver;

pub use aliases::AliasConfig;
pub use error::AliasConfigError;
pub use paths::{ALIASES_ENV_VAR, DEFAULT_ALIASES_FILE, resolve_aliases_path};
pub use resolver::{
    ColumnMap, MATCH_THRESHOLD, ResolvedColumn, best_match, normalize_header, resolve_columns,
    similarity,
};
