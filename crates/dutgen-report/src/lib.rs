#![deny(unsafe_code)]

pub mod error;
pub mod mapping;
pub mod output;
pub mod structure;
pub mod tcdut;

pub use error::RenderError;
pub use mapping::{format_modbus_address, render_mapping_file, render_mapping_line};
pub use output::{
    MAPPING_FILE_NAME, StructArtifacts, StructOutputPaths, write_mapping_file,
    write_struct_artifacts,
};
pub use structure::{NAME_GUTTER, dut_name, output_base, render_struct};
pub use tcdut::{TCPLC_OBJECT_VERSION, render_tcdut, render_tcdut_with_id};
