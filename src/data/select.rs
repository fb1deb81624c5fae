use super::error::SelectionError;

// ---------------------------------------------------------------------------
// 1-based index entry → candidate list position
// ---------------------------------------------------------------------------

/// Resolve a user-typed 1-based index against a candidate list of `count`
/// entries, returning the zero-based position.
///
/// Rejection is local: the caller re-prompts without touching the candidate
/// list itself.
pub fn resolve_index(input: &str, count: usize) -> Result<usize, SelectionError> {
    let trimmed = input.trim();
    let index: i64 = trimmed
        .parse()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;
    if index < 1 || index as usize > count {
        return Err(SelectionError::OutOfRange(index, count));
    }
    Ok(index as usize - 1)
}
