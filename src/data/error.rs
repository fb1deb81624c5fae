use thiserror::Error;

// ---------------------------------------------------------------------------
// Typed outcomes for the plotting pipeline
// ---------------------------------------------------------------------------

/// A dataset- or column-level condition that leaves nothing to render.
///
/// Individual cell parse failures are not errors; they are skipped during
/// classification and extraction and only become visible here, in aggregate,
/// when a whole dataset or column ends up unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    /// No header qualified as numeric. Terminal for this dataset: the user
    /// has to load different data.
    #[error("no numeric columns detected in dataset")]
    NoNumericColumns,

    /// A chosen column yielded zero usable values over the whole file.
    /// Recoverable by picking a different column.
    #[error("column '{0}' has no usable numeric values")]
    EmptySeries(String),

    /// A chosen column pair shares no row where both values are usable.
    /// Recoverable by picking different columns.
    #[error("columns '{0}' and '{1}' share no rows with usable numeric values")]
    EmptyPairs(String, String),
}

/// A rejected user-entered column index. Purely local: the caller re-prompts
/// and previously computed classifications stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("index {0} is out of range (valid: 1..={1})")]
    OutOfRange(i64, usize),
}
