//! Load, build and render passes for both generators.
//!
//! Each run reads one sheet, builds its records and renders the output text.
//! Nothing is written here; persistence belongs to the caller.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use dutgen_core::{
    MappingBatch, MappingOptions, StructBatch, build_mapping_records, build_struct_records,
};
use dutgen_ingest::{file_stem, list_sheets, read_grid};
use dutgen_map::{AliasConfig, resolve_aliases_path};
use dutgen_report::{StructArtifacts, render_mapping_file};

/// Output of one mapping-list run.
#[derive(Debug, Clone)]
pub struct MappingRun {
    pub sheet: String,
    pub batch: MappingBatch,
    /// Rendered file contents.
    pub text: String,
}

/// Output of one STRUCT run for a single sheet.
#[derive(Debug, Clone)]
pub struct StructRun {
    pub sheet: String,
    pub batch: StructBatch,
    pub artifacts: StructArtifacts,
}

/// Returns the requested sheet, or the first sheet of the file.
pub fn resolve_sheet(path: &Path, requested: Option<&str>) -> Result<String> {
    if let Some(sheet) = requested {
        return Ok(sheet.to_string());
    }
    let sheets = list_sheets(path).with_context(|| format!("list sheets of {}", path.display()))?;
    match sheets.into_iter().next() {
        Some(sheet) => Ok(sheet),
        None => bail!("{} contains no sheets", path.display()),
    }
}

/// Loads the header alias configuration from the flag, environment or
/// working directory.
pub fn load_aliases(explicit: Option<&Path>) -> Result<AliasConfig> {
    let path = resolve_aliases_path(explicit);
    let config = AliasConfig::load(&path).context("load alias configuration")?;
    info!(path = %path.display(), fields = config.fields().count(), "loaded alias configuration");
    Ok(config)
}

/// Builds the mapping list for one sheet.
pub fn run_mapping(path: &Path, sheet: Option<&str>, options: &MappingOptions) -> Result<MappingRun> {
    let sheet = resolve_sheet(path, sheet)?;
    let span = info_span!("mapping", file = %path.display(), sheet = %sheet);
    let _guard = span.enter();

    let grid = read_grid(path, &sheet).with_context(|| format!("read sheet '{sheet}'"))?;
    let batch = build_mapping_records(&grid, options);
    let text = render_mapping_file(&batch.records);
    Ok(MappingRun { sheet, batch, text })
}

/// Builds the STRUCT text and TcDUT document for one sheet.
pub fn run_struct(path: &Path, sheet: &str, aliases: &AliasConfig) -> Result<StructRun> {
    let span = info_span!("struct", file = %path.display(), sheet = %sheet);
    let _guard = span.enter();

    let grid = read_grid(path, sheet).with_context(|| format!("read sheet '{sheet}'"))?;
    let batch = build_struct_records(&grid, aliases)
        .with_context(|| format!("build struct from sheet '{sheet}'"))?;
    let artifacts = StructArtifacts::build(&file_stem(path), sheet, &batch.records)
        .with_context(|| format!("render struct for sheet '{sheet}'"))?;
    info!(dut = %artifacts.dut_name, fields = batch.records.len(), "rendered struct");
    Ok(StructRun {
        sheet: sheet.to_string(),
        batch,
        artifacts,
    })
}
