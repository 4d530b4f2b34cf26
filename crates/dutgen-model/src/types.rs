use std::fmt;

use serde::{Deserialize, Serialize};

/// PLC data types a register can be declared with.
///
/// `Unknown` is the sentinel for tokens that do not map to a PLC type; rows
/// carrying it never reach rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CanonicalType {
    Uint,
    Udint,
    Int,
    Dint,
    Real,
    Lreal,
    String,
    Unknown,
}

impl CanonicalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uint => "UINT",
            Self::Udint => "UDINT",
            Self::Int => "INT",
            Self::Dint => "DINT",
            Self::Real => "REAL",
            Self::Lreal => "LREAL",
            Self::String => "STRING",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pad through the formatter so `{:<10}` width specs apply.
        f.pad(self.as_str())
    }
}
