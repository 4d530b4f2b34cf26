use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{error, info_span};

use dutgen_cli::pipeline::{load_aliases, resolve_sheet, run_mapping, run_struct};
use dutgen_core::{MappingColumns, MappingOptions};
use dutgen_ingest::list_sheets;
use dutgen_map::AliasConfig;
use dutgen_report::{write_mapping_file, write_struct_artifacts};

use crate::cli::{MappingArgs, SheetsArgs, StructArgs};
use crate::summary::apply_table_style;
use crate::types::{GeneratedSheet, MappingResult, SheetOutcome, SheetSummary, StructResult};

pub fn run_sheets(args: &SheetsArgs) -> Result<()> {
    let sheets = list_sheets(&args.file)
        .with_context(|| format!("list sheets of {}", args.file.display()))?;
    let mut table = Table::new();
    table.set_header(vec!["#", "Sheet"]);
    apply_table_style(&mut table);
    for (index, sheet) in sheets.iter().enumerate() {
        table.add_row(vec![(index + 1).to_string(), sheet.clone()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_mapping_command(args: &MappingArgs) -> Result<MappingResult> {
    let columns = MappingColumns::from_letters(
        &args.name_col,
        &args.type_col,
        &args.address_col,
        args.info_col.as_deref(),
    )
    .context("invalid column selection")?;
    let options = MappingOptions::new(columns).with_fixed_comment(args.comment.clone());

    let run = run_mapping(&args.file, args.sheet.as_deref(), &options)?;
    let output = if args.dry_run {
        None
    } else {
        Some(write_mapping_file(&args.output_dir, &run.text)?)
    };
    Ok(MappingResult {
        file: args.file.clone(),
        sheet: run.sheet,
        records: run.batch.records.len(),
        skipped_rows: run.batch.skipped_rows,
        output,
    })
}

pub fn run_struct_command(args: &StructArgs) -> Result<StructResult> {
    let span = info_span!("struct_command", file = %args.file.display());
    let _guard = span.enter();

    let aliases = load_aliases(args.aliases.as_deref())?;
    let sheets = selected_sheets(args)?;

    let mut result = StructResult {
        file: args.file.clone(),
        output_dir: args.output_dir.clone(),
        sheets: Vec::with_capacity(sheets.len()),
        has_errors: false,
    };
    for sheet in sheets {
        let outcome = match generate_sheet(args, &sheet, &aliases) {
            Ok(generated) => SheetOutcome::Generated(generated),
            Err(err) => {
                error!(sheet = %sheet, "{err:#}");
                result.has_errors = true;
                SheetOutcome::Failed(format!("{err:#}"))
            }
        };
        result.sheets.push(SheetSummary { sheet, outcome });
    }
    Ok(result)
}

fn selected_sheets(args: &StructArgs) -> Result<Vec<String>> {
    if args.all_sheets {
        return list_sheets(&args.file)
            .with_context(|| format!("list sheets of {}", args.file.display()));
    }
    if !args.sheets.is_empty() {
        return Ok(args.sheets.clone());
    }
    let first = resolve_sheet(&args.file, None)?;
    Ok(vec![first])
}

fn generate_sheet(args: &StructArgs, sheet: &str, aliases: &AliasConfig) -> Result<GeneratedSheet> {
    let run = run_struct(&args.file, sheet, aliases)?;
    let outputs = if args.dry_run {
        None
    } else {
        Some(write_struct_artifacts(&args.output_dir, &run.artifacts)?)
    };
    let columns = run
        .batch
        .columns
        .iter()
        .map(|(field, column)| (field, column.header.clone()))
        .collect();
    Ok(GeneratedSheet {
        dut_name: run.artifacts.dut_name,
        records: run.batch.records.len(),
        skipped_rows: run.batch.skipped_rows,
        columns,
        outputs,
    })
}
