#![deny(unsafe_code)]

pub mod cell;
pub mod error;
pub mod field;
pub mod record;
pub mod types;

pub use cell::{CellValue, Grid};
pub use error::{ModelError, Result};
pub use field::LogicalField;
pub use record::{MappingRecord, StructRecord};
pub use types::CanonicalType;
