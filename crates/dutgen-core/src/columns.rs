use crate::BuildError;

/// Converts a spreadsheet column letter to a 0-based index (`A` = 0, `AA` = 26).
pub fn column_letter_to_index(letter: &str) -> Result<usize, BuildError> {
    let invalid = || BuildError::InvalidColumnLetter {
        input: letter.to_string(),
    };
    let trimmed = letter.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(invalid());
    }
    let number = trimmed
        .bytes()
        .map(|byte| usize::from(byte.to_ascii_uppercase() - b'A') + 1)
        .try_fold(0usize, |acc, digit| acc.checked_mul(26)?.checked_add(digit))
        .ok_or_else(invalid)?;
    Ok(number - 1)
}
