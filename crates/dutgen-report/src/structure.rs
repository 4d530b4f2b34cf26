//! STRUCT declaration text for a TwinCAT DUT.

use dutgen_core::{safe_sheet_name, sanitize_struct_name};
use dutgen_model::StructRecord;

/// Spaces between the longest field name and its colon.
pub const NAME_GUTTER: usize = 4;

/// DUT type name for a sheet of a source file.
pub fn dut_name(file_stem: &str, sheet_name: &str) -> String {
    sanitize_struct_name(&format!("{file_stem}_{}", safe_sheet_name(sheet_name)))
}

/// File name, without extension, shared by the `.txt` and `.TcDUT` outputs.
pub fn output_base(file_stem: &str, sheet_name: &str) -> String {
    format!("{file_stem}_{}_modbus_struct", safe_sheet_name(sheet_name))
}

/// Renders the `TYPE ... END_TYPE` block.
///
/// Colons line up in one column: every name is padded to the longest name
/// plus [`NAME_GUTTER`]. The text has no trailing newline.
pub fn render_struct(dut_name: &str, records: &[StructRecord]) -> String {
    let widest = records
        .iter()
        .map(|record| record.name.chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<String> = records
        .iter()
        .map(|record| {
            let pad = widest - record.name.chars().count() + NAME_GUTTER;
            format!(
                "    {name}{pad}: UINT; (* ModbusAddress: {address};  Scale: {scale};  Unit: {unit};  Offset: {offset}; *)",
                name = record.name,
                pad = " ".repeat(pad),
                address = record.address,
                scale = record.scale,
                unit = record.unit,
                offset = record.offset,
            )
        })
        .collect();

    format!(
        "TYPE {dut_name} :\nSTRUCT\n{}\nEND_STRUCT\nEND_TYPE",
        lines.join("\n")
    )
}
