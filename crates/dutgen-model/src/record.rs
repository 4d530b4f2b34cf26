//! Variable records produced by the record builders.

use serde::{Deserialize, Serialize};

use crate::CanonicalType;

/// One declaration line of the flat Modbus mapping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingRecord {
    /// Sanitized identifier, unique within the batch.
    pub name: String,
    /// Normalized PLC type; never `Unknown` once the record is built.
    pub data_type: CanonicalType,
    /// Register address; `None` when the cell was missing or not numeric.
    pub address: Option<f64>,
    /// Free-text comment carried into the declaration.
    pub information: String,
}

/// One field of the generated STRUCT/DUT.
///
/// Every struct field is declared as a single `UINT` register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructRecord {
    pub name: String,
    pub address: i64,
    pub scale: String,
    pub unit: String,
    pub offset: String,
}
