//! Flat mapping list: one fixed-width declaration line per variable.

use dutgen_model::MappingRecord;
use dutgen_model::cell::format_number;

/// Formats a register address: whole numbers without a decimal point,
/// fractional values as written, missing values as `N/A`.
pub fn format_modbus_address(address: Option<f64>) -> String {
    match address {
        Some(value) if value.is_finite() => format_number(value),
        _ => "N/A".to_string(),
    }
}

/// Renders one declaration line.
///
/// Widths are minimums; longer values are never truncated.
pub fn render_mapping_line(record: &MappingRecord) -> String {
    let address = format_modbus_address(record.address);
    format!(
        "{name:<30}: {ty:<10}; (*ModbusAddress: {address:<10}; DataType: {ty:<10}; Information: {info};*)",
        name = record.name,
        ty = record.data_type,
        info = record.information,
    )
}

/// Renders the whole list, each line terminated by a newline.
pub fn render_mapping_file(records: &[MappingRecord]) -> String {
    records
        .iter()
        .map(|record| render_mapping_line(record) + "\n")
        .collect()
}
