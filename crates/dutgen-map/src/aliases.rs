//! Header alias configuration.
//!
//! The configuration is a JSON object mapping each logical field to the
//! header spellings it may appear under, most preferred first:
//!
//! ```json
//! {
//!   "name": ["name", "variable", "tag"],
//!   "address": ["address", "addr", "register"]
//! }
//! ```
//!
//! Keys that are not a known [`LogicalField`] are ignored with a warning.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use dutgen_model::LogicalField;
use tracing::{debug, warn};

use crate::AliasConfigError;

/// Ordered alias candidates per logical field. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasConfig {
    aliases: BTreeMap<LogicalField, Vec<String>>,
}

impl AliasConfig {
    /// Builds a configuration from `(field, aliases)` pairs.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (LogicalField, Vec<S>)>,
        S: Into<String>,
    {
        let aliases = entries
            .into_iter()
            .map(|(field, aliases)| (field, aliases.into_iter().map(Into::into).collect()))
            .collect();
        Self { aliases }
    }

    /// Loads the configuration file.
    pub fn load(path: &Path) -> Result<Self, AliasConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| AliasConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&contents).map_err(|source| AliasConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        if config.is_empty() {
            return Err(AliasConfigError::Empty {
                path: path.to_path_buf(),
                expected: LogicalField::ALL
                    .iter()
                    .map(LogicalField::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
        debug!(path = %path.display(), fields = config.aliases.len(), "loaded alias configuration");
        Ok(config)
    }

    /// Parses the JSON form without touching the filesystem.
    pub fn from_json_str(contents: &str) -> Result<Self, serde_json::Error> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(contents)?;
        let mut aliases = BTreeMap::new();
        for (key, candidates) in raw {
            match key.parse::<LogicalField>() {
                Ok(field) => {
                    aliases.insert(field, candidates);
                }
                Err(_) => warn!(key = %key, "ignoring unknown field in alias configuration"),
            }
        }
        Ok(Self { aliases })
    }

    /// Alias candidates for a field in priority order.
    pub fn aliases(&self, field: LogicalField) -> &[String] {
        self.aliases
            .get(&field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Fields with at least one configured entry.
    pub fn fields(&self) -> impl Iterator<Item = LogicalField> + '_ {
        self.aliases.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
