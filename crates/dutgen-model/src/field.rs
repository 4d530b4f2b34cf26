use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Logical columns the struct generator looks for in a sheet header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalField {
    Name,
    Address,
    Datatype,
    Scale,
    Unit,
    Offset,
    Description,
}

impl LogicalField {
    pub const ALL: [LogicalField; 7] = [
        Self::Name,
        Self::Address,
        Self::Datatype,
        Self::Scale,
        Self::Unit,
        Self::Offset,
        Self::Description,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Datatype => "datatype",
            Self::Scale => "scale",
            Self::Unit => "unit",
            Self::Offset => "offset",
            Self::Description => "description",
        }
    }

    /// Value substituted when the field's column is unresolved or the cell is
    /// blank. `None` for fields without a default; a row missing its address
    /// is dropped rather than defaulted.
    pub fn default_value(&self) -> Option<&'static str> {
        match self {
            Self::Name => Some("UnnamedVariable"),
            Self::Scale => Some("1"),
            Self::Unit => Some(""),
            Self::Offset => Some("0"),
            Self::Address | Self::Datatype | Self::Description => None,
        }
    }
}

impl FromStr for LogicalField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == key)
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
