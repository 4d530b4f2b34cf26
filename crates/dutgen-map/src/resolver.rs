//! Fuzzy resolution of logical fields to sheet header columns.
//!
//! Similarity is the normalized Indel ratio (`2 * LCS / (len_a + len_b)`)
//! computed on lowercased strings. For each field, alias candidates are
//! tried in priority order and the first alias whose best header match
//! reaches [`MATCH_THRESHOLD`] wins; a later alias is never consulted once an
//! earlier one has matched, even if it would score higher.

use std::collections::BTreeMap;

use dutgen_model::LogicalField;
use rapidfuzz::distance::indel;
use tracing::{debug, warn};

use crate::AliasConfig;

/// Minimum similarity for an alias to claim a header.
pub const MATCH_THRESHOLD: f64 = 0.70;

/// A header column claimed by a logical field.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedColumn {
    /// 0-based column index in the grid.
    pub index: usize,
    /// Normalized header text of the column.
    pub header: String,
    /// Alias that matched.
    pub alias: String,
    /// Similarity between alias and header (0.0 to 1.0).
    pub score: f64,
}

/// Logical field to header column assignment for one sheet.
///
/// Built once per sheet and read-only afterwards. Fields that did not
/// resolve are simply absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMap {
    columns: BTreeMap<LogicalField, ResolvedColumn>,
}

impl ColumnMap {
    pub fn get(&self, field: LogicalField) -> Option<&ResolvedColumn> {
        self.columns.get(&field)
    }

    /// Column index resolved for a field.
    pub fn index(&self, field: LogicalField) -> Option<usize> {
        self.columns.get(&field).map(|column| column.index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LogicalField, &ResolvedColumn)> {
        self.columns.iter().map(|(field, column)| (*field, column))
    }
}

/// Lowercases and trims a header cell before matching.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Case-insensitive similarity ratio between two strings.
pub fn similarity(left: &str, right: &str) -> f64 {
    let left = left.to_lowercase();
    let right = right.to_lowercase();
    indel::normalized_similarity(left.chars(), right.chars())
}

/// Finds the header most similar to `alias`.
///
/// Returns the column index and score of the best header scoring at or
/// above [`MATCH_THRESHOLD`]. Ties go to the leftmost header; blank headers
/// never match.
pub fn best_match(alias: &str, headers: &[String]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, header) in headers.iter().enumerate() {
        if header.trim().is_empty() {
            continue;
        }
        let score = similarity(alias, header);
        if score < MATCH_THRESHOLD {
            continue;
        }
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    best
}

/// Resolves every configured field against the header row.
pub fn resolve_columns(config: &AliasConfig, headers: &[String]) -> ColumnMap {
    let mut columns = BTreeMap::new();
    for field in config.fields() {
        let resolved = config.aliases(field).iter().find_map(|alias| {
            best_match(alias, headers).map(|(index, score)| ResolvedColumn {
                index,
                header: headers[index].clone(),
                alias: alias.clone(),
                score,
            })
        });
        match resolved {
            Some(column) => {
                debug!(
                    field = %field,
                    header = %column.header,
                    alias = %column.alias,
                    score = column.score,
                    "resolved column"
                );
                columns.insert(field, column);
            }
            None => warn!(field = %field, "no header matched any alias; using defaults"),
        }
    }
    ColumnMap { columns }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| normalize_header(value)).collect()
    }

    #[test]
    fn exact_match_scores_one() {
        assert!((similarity("Address", "address") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn close_spelling_clears_threshold() {
        // 2 * 4 / (4 + 7)
        let score = similarity("addr", "address");
        assert!(score >= MATCH_THRESHOLD, "got {score}");
    }

    #[test]
    fn unrelated_header_is_rejected() {
        let cols = headers(&["Description", "Unit"]);
        assert_eq!(best_match("address", &cols), None);
    }

    #[test]
    fn best_header_wins_over_first_acceptable() {
        let cols = headers(&["Adress", "Address"]);
        let (index, score) = best_match("address", &cols).expect("match");
        assert_eq!(index, 1);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn blank_headers_never_match() {
        let cols = headers(&["", "  "]);
        assert_eq!(best_match("", &cols), None);
    }
}
