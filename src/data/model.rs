use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// One data row: column name → raw text as it appeared in the file.
///
/// A column may be absent from a record (ragged row), and a stored value may
/// be blank or whitespace-only. Both count as "missing", never as zero.
pub type Record = BTreeMap<String, String>;

/// A cell counts as present only if the trimmed text is non-empty.
pub fn cell<'a>(record: &'a Record, column: &str) -> Option<&'a str> {
    let trimmed = record.get(column)?.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// A cell's numeric value, if it is present and parses as a finite float.
/// Non-finite values would poison the min/max span, so they count as unusable.
pub fn numeric_cell(record: &Record, column: &str) -> Option<f64> {
    cell(record, column)?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// TableData – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset: an ordered header list plus the data rows.
#[derive(Debug, Clone, Default)]
pub struct TableData {
    /// Ordered, unique column names from the header row. Defines display
    /// order and the 1-based indices shown in the selection screen.
    pub headers: Vec<String>,
    /// All data rows, in file order.
    pub records: Vec<Record>,
}

impl TableData {
    pub fn new(headers: Vec<String>, records: Vec<Record>) -> Self {
        TableData { headers, records }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
