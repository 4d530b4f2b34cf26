//! Generated artifacts and writing them to disk.

use std::fs;
use std::path::{Path, PathBuf};

use dutgen_model::StructRecord;
use tracing::info;
use uuid::Uuid;

use crate::structure::{dut_name, output_base, render_struct};
use crate::tcdut::render_tcdut_with_id;
use crate::RenderError;

/// File name of the mapping list inside the output directory.
pub const MAPPING_FILE_NAME: &str = "modbus_mappings_cleaned_fixed.txt";

/// Everything produced for one sheet by the STRUCT generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructArtifacts {
    pub dut_name: String,
    /// File name shared by both outputs, without extension.
    pub output_base: String,
    pub struct_text: String,
    pub tcdut: String,
}

impl StructArtifacts {
    /// Renders both outputs for a sheet of `file_stem`.
    pub fn build(
        file_stem: &str,
        sheet_name: &str,
        records: &[StructRecord],
    ) -> Result<Self, RenderError> {
        Self::build_with_id(file_stem, sheet_name, records, Uuid::new_v4())
    }

    pub fn build_with_id(
        file_stem: &str,
        sheet_name: &str,
        records: &[StructRecord],
        id: Uuid,
    ) -> Result<Self, RenderError> {
        let dut_name = dut_name(file_stem, sheet_name);
        let struct_text = render_struct(&dut_name, records);
        let tcdut = render_tcdut_with_id(&dut_name, &struct_text, id)?;
        Ok(Self {
            output_base: output_base(file_stem, sheet_name),
            dut_name,
            struct_text,
            tcdut,
        })
    }

    pub fn text_file_name(&self) -> String {
        format!("{}.txt", self.output_base)
    }

    pub fn tcdut_file_name(&self) -> String {
        format!("{}.TcDUT", self.output_base)
    }
}

/// Paths written for one sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructOutputPaths {
    pub text: PathBuf,
    pub tcdut: PathBuf,
}

fn write_file(path: &Path, contents: &str) -> Result<(), RenderError> {
    fs::write(path, contents).map_err(|source| RenderError::io(path, source))
}

/// Writes `<base>.txt` and `<base>.TcDUT` into `dir`, overwriting both.
pub fn write_struct_artifacts(
    dir: &Path,
    artifacts: &StructArtifacts,
) -> Result<StructOutputPaths, RenderError> {
    fs::create_dir_all(dir).map_err(|source| RenderError::io(dir, source))?;
    let paths = StructOutputPaths {
        text: dir.join(artifacts.text_file_name()),
        tcdut: dir.join(artifacts.tcdut_file_name()),
    };
    write_file(&paths.text, &artifacts.struct_text)?;
    write_file(&paths.tcdut, &artifacts.tcdut)?;
    info!(
        dut = %artifacts.dut_name,
        text = %paths.text.display(),
        tcdut = %paths.tcdut.display(),
        "wrote struct outputs"
    );
    Ok(paths)
}

/// Writes rendered mapping lines into `dir`, overwriting any previous list.
pub fn write_mapping_file(dir: &Path, contents: &str) -> Result<PathBuf, RenderError> {
    fs::create_dir_all(dir).map_err(|source| RenderError::io(dir, source))?;
    let path = dir.join(MAPPING_FILE_NAME);
    write_file(&path, contents)?;
    info!(path = %path.display(), lines = contents.lines().count(), "wrote mapping list");
    Ok(path)
}
