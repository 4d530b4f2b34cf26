//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dutgen",
    version,
    about = "Generate TwinCAT Modbus declarations from register spreadsheets",
    long_about = "Generate TwinCAT Modbus declarations from register spreadsheets.\n\n\
                  `mapping` writes a flat variable list from user-chosen columns.\n\
                  `struct` finds the columns by header name and writes a STRUCT\n\
                  declaration plus a .TcDUT file per sheet."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the sheets of a spreadsheet.
    Sheets(SheetsArgs),

    /// Write the flat Modbus mapping list from chosen columns.
    Mapping(MappingArgs),

    /// Write STRUCT and .TcDUT declarations using header aliases.
    Struct(StructArgs),
}

#[derive(Args)]
pub struct SheetsArgs {
    /// Spreadsheet (.xlsx, .xlsm, .xlsb, .xls, .ods) or CSV file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Args)]
pub struct MappingArgs {
    /// Spreadsheet (.xlsx, .xlsm, .xlsb, .xls, .ods) or CSV file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Sheet to read (default: the first sheet).
    #[arg(long = "sheet", value_name = "SHEET")]
    pub sheet: Option<String>,

    /// Column letter holding variable names.
    #[arg(long = "name-col", value_name = "LETTER")]
    pub name_col: String,

    /// Column letter holding data types.
    #[arg(long = "type-col", value_name = "LETTER")]
    pub type_col: String,

    /// Column letter holding register addresses.
    #[arg(long = "address-col", value_name = "LETTER")]
    pub address_col: String,

    /// Column letter holding per-row comments.
    #[arg(long = "info-col", value_name = "LETTER")]
    pub info_col: Option<String>,

    /// Comment written on every line when no --info-col is given.
    #[arg(long = "comment", value_name = "TEXT", default_value = "")]
    pub comment: String,

    /// Directory for the generated list.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Render and report without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct StructArgs {
    /// Spreadsheet (.xlsx, .xlsm, .xlsb, .xls, .ods) or CSV file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Sheet to process; repeat for several (default: the first sheet).
    #[arg(long = "sheet", value_name = "SHEET", conflicts_with = "all_sheets")]
    pub sheets: Vec<String>,

    /// Process every sheet of the workbook.
    #[arg(long = "all-sheets")]
    pub all_sheets: bool,

    /// Header alias configuration (default: $DUTGEN_ALIASES, then
    /// ./modbus_ai_config.json).
    #[arg(long = "aliases", value_name = "PATH")]
    pub aliases: Option<PathBuf>,

    /// Directory for the generated files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Render and report without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
