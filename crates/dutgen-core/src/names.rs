//! Display names to PLC identifiers.
//!
//! Sanitizing is pure and context free. Uniqueness inside a batch is the
//! job of [`NameRegistry`].

use std::collections::HashSet;

/// Placeholder for names that sanitize to nothing.
pub const INVALID_NAME: &str = "InvalidName";

/// Prefix carried by every mapping-list variable name.
pub const MAPPING_NAME_PREFIX: &str = "Var";

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn camel_case(cleaned: &str) -> String {
    cleaned.split_whitespace().map(capitalize).collect()
}

/// Sanitizes a name for a STRUCT field or DUT.
///
/// Keeps ASCII letters, digits, underscores and spaces, drops any leading
/// characters that cannot start an identifier, then CamelCases the
/// space-separated words. Never returns an empty string.
pub fn sanitize_struct_name(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_' || *ch == ' ')
        .collect();
    let trimmed = kept.trim_start_matches(|ch: char| !(ch.is_ascii_alphabetic() || ch == '_'));
    let name = camel_case(trimmed);
    if name.is_empty() {
        INVALID_NAME.to_string()
    } else {
        name
    }
}

/// Sanitizes a name for the flat mapping list.
///
/// Keeps ASCII letters, digits and spaces, CamelCases the words and adds the
/// `Var` prefix, so names whose first word starts with a digit stay valid
/// identifiers. Never returns an empty string.
pub fn sanitize_mapping_name(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == ' ')
        .collect();
    let name = camel_case(&kept);
    if name.is_empty() {
        format!("{MAPPING_NAME_PREFIX}{INVALID_NAME}")
    } else {
        format!("{MAPPING_NAME_PREFIX}{name}")
    }
}

/// Reduces a sheet name to word characters for use in file and DUT names.
pub fn safe_sheet_name(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_alphanumeric() || *ch == '_')
        .collect()
}

/// Names already issued in one generation batch.
///
/// A name seen before gets `_1`, `_2`, ... appended, taking the first
/// suffix not yet issued. Claims must happen in row order.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    issued: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues `base`, or `base_<n>` with the smallest unused `n >= 1`.
    pub fn claim(&mut self, base: &str) -> String {
        let mut name = base.to_string();
        let mut counter = 1usize;
        while self.issued.contains(&name) {
            name = format!("{base}_{counter}");
            counter += 1;
        }
        self.issued.insert(name.clone());
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn struct_names_are_camel_cased() {
        assert_eq!(sanitize_struct_name("Temp 1"), "Temp1");
        assert_eq!(sanitize_struct_name("TEMP sensor"), "TempSensor");
        assert_eq!(sanitize_struct_name("flow-rate (m3/h)"), "FlowrateM3h");
    }

    #[test]
    fn struct_names_drop_leading_non_letters() {
        assert_eq!(sanitize_struct_name("1st Stage"), "StStage");
        assert_eq!(sanitize_struct_name("  42 "), INVALID_NAME);
        assert_eq!(sanitize_struct_name("_hidden"), "_hidden");
    }

    #[test]
    fn struct_names_keep_underscores() {
        assert_eq!(sanitize_struct_name("plant_Sheet1"), "Plant_sheet1");
    }

    #[test]
    fn mapping_names_carry_prefix() {
        assert_eq!(sanitize_mapping_name("Temp Sensor"), "VarTempSensor");
        assert_eq!(sanitize_mapping_name("2nd pump"), "Var2ndPump");
        assert_eq!(sanitize_mapping_name("motor_speed"), "VarMotorspeed");
        assert_eq!(sanitize_mapping_name("%%"), "VarInvalidName");
    }

    #[test]
    fn sheet_names_keep_word_characters() {
        assert_eq!(safe_sheet_name("Sheet 1 (copy)"), "Sheet1copy");
        assert_eq!(safe_sheet_name("io_map"), "io_map");
    }

    #[test]
    fn registry_appends_incrementing_suffixes() {
        let mut registry = NameRegistry::new();
        assert_eq!(registry.claim("Temp1"), "Temp1");
        assert_eq!(registry.claim("Temp1"), "Temp1_1");
        assert_eq!(registry.claim("Temp1"), "Temp1_2");
        assert_eq!(registry.issued.len(), 3);
    }

    #[test]
    fn registry_skips_suffixes_already_taken() {
        let mut registry = NameRegistry::new();
        assert_eq!(registry.claim("Temp1_1"), "Temp1_1");
        assert_eq!(registry.claim("Temp1"), "Temp1");
        assert_eq!(registry.claim("Temp1"), "Temp1_2");
        assert!(registry.issued.contains("Temp1_2"));
    }
}
