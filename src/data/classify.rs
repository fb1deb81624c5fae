use super::error::PlotError;
use super::model::{cell, TableData};

// ---------------------------------------------------------------------------
// Numeric column detection
// ---------------------------------------------------------------------------

/// How many leading records the classifier inspects per column. Bounds the
/// cost on large files; extraction later scans the whole file regardless.
pub const CLASSIFY_WINDOW: usize = 50;

/// Return the headers that look numeric, in header order.
///
/// A header qualifies when, within the first `window` records, at least one
/// value was seen (present and non-blank after trimming) and every seen
/// value parses as a float. Integers and decimals are accepted uniformly.
///
/// An entirely blank column is rejected: absence of positive evidence is not
/// acceptance, and offering such a column would only lead to an empty
/// extraction later.
pub fn numeric_columns(table: &TableData, window: usize) -> Vec<String> {
    let sample = &table.records[..table.records.len().min(window)];

    table
        .headers
        .iter()
        .filter(|header| {
            let mut saw_value = false;
            for record in sample {
                match cell(record, header) {
                    None => continue,
                    Some(text) => {
                        if text.parse::<f64>().is_err() {
                            // One bad sample disqualifies the column.
                            return false;
                        }
                        saw_value = true;
                    }
                }
            }
            saw_value
        })
        .cloned()
        .collect()
}

/// Like [`numeric_columns`], but an empty result is reported as
/// [`PlotError::NoNumericColumns`] so callers cannot silently proceed with
/// nothing to offer.
pub fn classify(table: &TableData, window: usize) -> Result<Vec<String>, PlotError> {
    let columns = numeric_columns(table, window);
    if columns.is_empty() {
        return Err(PlotError::NoNumericColumns);
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn table(headers: &[&str], rows: &[&[(&str, &str)]]) -> TableData {
        let records: Vec<Record> = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .collect();
        TableData::new(headers.iter().map(|h| h.to_string()).collect(), records)
    }

    #[test]
    fn keeps_header_order() {
        let t = table(
            &["name", "wins", "rating"],
            &[
                &[("name", "utd"), ("wins", "3"), ("rating", "7.5")],
                &[("name", "city"), ("wins", "1"), ("rating", "6.0")],
            ],
        );

        assert_eq!(numeric_columns(&t, CLASSIFY_WINDOW), ["wins", "rating"]);
    }

    #[test]
    fn one_unparseable_sample_disqualifies() {
        let t = table(&["b"], &[&[("b", "1.5")], &[("b", "two")]]);

        assert!(numeric_columns(&t, CLASSIFY_WINDOW).is_empty());
    }

    #[test]
    fn entirely_blank_column_is_rejected() {
        let t = table(
            &["blank", "ok"],
            &[&[("blank", ""), ("ok", "1")], &[("blank", "  "), ("ok", "2")]],
        );

        assert_eq!(numeric_columns(&t, CLASSIFY_WINDOW), ["ok"]);
    }

    #[test]
    fn blanks_inside_numeric_column_are_ignored() {
        let t = table(&["a"], &[&[("a", "1")], &[("a", "")], &[("a", "2.25")]]);

        assert_eq!(numeric_columns(&t, CLASSIFY_WINDOW), ["a"]);
    }

    #[test]
    fn bad_value_beyond_window_goes_unnoticed() {
        let mut rows: Vec<Vec<(String, String)>> = (0..10)
            .map(|i| vec![("a".to_string(), i.to_string())])
            .collect();
        rows.push(vec![("a".to_string(), "oops".to_string())]);

        let records: Vec<Record> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        let t = TableData::new(vec!["a".to_string()], records);

        // Window 10 never sees the bad row; full scan would.
        assert_eq!(numeric_columns(&t, 10), ["a"]);
        assert!(numeric_columns(&t, 11).is_empty());
    }

    #[test]
    fn classify_reports_empty_result() {
        let t = table(&["name"], &[&[("name", "utd")]]);

        assert_eq!(
            classify(&t, CLASSIFY_WINDOW),
            Err(PlotError::NoNumericColumns)
        );
    }

    #[test]
    fn classify_is_repeatable() {
        let t = table(
            &["x", "y"],
            &[&[("x", "1"), ("y", "2")], &[("x", "3"), ("y", "4")]],
        );

        let first = classify(&t, CLASSIFY_WINDOW).unwrap();
        let second = classify(&t, CLASSIFY_WINDOW).unwrap();
        assert_eq!(first, second);
    }
}
