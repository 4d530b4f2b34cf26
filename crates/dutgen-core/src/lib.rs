#![deny(unsafe_code)]

pub mod columns;
pub mod error;
pub mod mapping;
pub mod names;
pub mod structure;
pub mod types;

pub use columns::column_letter_to_index;
pub use error::BuildError;
pub use mapping::{MappingBatch, MappingColumns, MappingOptions, build_mapping_records, parse_address};
pub use names::{
    INVALID_NAME, MAPPING_NAME_PREFIX, NameRegistry, safe_sheet_name, sanitize_mapping_name,
    sanitize_struct_name,
};
pub use structure::{StructBatch, build_struct_records, parse_register_address};
pub use types::{TYPE_TABLE, normalize_type, normalize_type_token};
