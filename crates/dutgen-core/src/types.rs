//! Free-text data type tokens to PLC types.

use dutgen_model::{CanonicalType, CellValue};

/// Lookup table for data type tokens, keyed by lowercase token.
///
/// The `/` entry appears in real register maps as a "not applicable"
/// marker and must keep mapping to `Unknown`.
pub const TYPE_TABLE: &[(&str, CanonicalType)] = &[
    ("uint16", CanonicalType::Uint),
    ("uint32", CanonicalType::Udint),
    ("int16", CanonicalType::Int),
    ("int32", CanonicalType::Dint),
    ("float", CanonicalType::Real),
    ("double", CanonicalType::Lreal),
    ("string", CanonicalType::String),
    ("uint", CanonicalType::Uint),
    ("/", CanonicalType::Unknown),
];

/// Normalizes a type token; surrounding whitespace and case are ignored.
pub fn normalize_type_token(token: &str) -> CanonicalType {
    let key = token.trim().to_lowercase();
    TYPE_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map_or(CanonicalType::Unknown, |(_, canonical)| *canonical)
}

/// Normalizes a type cell. Only text cells can carry a type.
pub fn normalize_type(cell: &CellValue) -> CanonicalType {
    cell.as_text()
        .map_or(CanonicalType::Unknown, normalize_type_token)
}
