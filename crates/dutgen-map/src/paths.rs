//! Alias configuration path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the alias configuration file.
pub const ALIASES_ENV_VAR: &str = "DUTGEN_ALIASES";

/// File looked up in the working directory when nothing else is configured.
pub const DEFAULT_ALIASES_FILE: &str = "modbus_ai_config.json";

/// Get the alias configuration path.
///
/// Resolution order:
/// 1. explicit path (the `--aliases` flag)
/// 2. `DUTGEN_ALIASES` environment variable
/// 3. `modbus_ai_config.json` in the working directory
pub fn resolve_aliases_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Ok(path) = std::env::var(ALIASES_ENV_VAR) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }
    PathBuf::from(DEFAULT_ALIASES_FILE)
}
