use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::{Record, TableData};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a delimited text file into a [`TableData`]. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`          – comma-separated, header row required
/// * `.tsv` / `.tab` – tab-separated, header row required
pub fn load_file(path: &Path) -> Result<TableData> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_delimited(path, b','),
        "tsv" | "tab" => load_delimited(path, b'\t'),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Delimited reader
// ---------------------------------------------------------------------------

/// Header row with unique column names, then data rows. Rows may be ragged:
/// missing trailing fields become absent cells, surplus fields are dropped.
fn load_delimited(path: &Path, delimiter: u8) -> Result<TableData> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)
        .context("opening file")?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading header row")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        bail!("file has no header row");
    }
    for (i, header) in headers.iter().enumerate() {
        if headers[..i].contains(header) {
            bail!("duplicate column name '{header}' in header row");
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("reading row {row_no}"))?;

        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect();
        records.push(record);
    }

    Ok(TableData::new(headers, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_temp(name: &str, contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create file");
        file.write_all(contents.as_bytes()).expect("write file");
        (dir, path)
    }

    #[test]
    fn loads_a_csv_with_header() {
        let (_dir, path) = write_temp("matches.csv", "team,goals\nutd,3\ncity,1\n");

        let table = load_file(&path).unwrap();
        assert_eq!(table.headers, ["team", "goals"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0]["goals"], "3");
        assert_eq!(table.records[1]["team"], "city");
    }

    #[test]
    fn loads_tab_separated_files() {
        let (_dir, path) = write_temp("data.tsv", "a\tb\n1\t2\n");

        let table = load_file(&path).unwrap();
        assert_eq!(table.headers, ["a", "b"]);
        assert_eq!(table.records[0]["b"], "2");
    }

    #[test]
    fn short_rows_leave_cells_absent() {
        let (_dir, path) = write_temp("ragged.csv", "a,b,c\n1,2\n4,5,6\n");

        let table = load_file(&path).unwrap();
        assert!(!table.records[0].contains_key("c"));
        assert_eq!(table.records[1]["c"], "6");
    }

    #[test]
    fn rejects_unsupported_extensions() {
        let (_dir, path) = write_temp("data.parquet", "whatever");

        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn rejects_duplicate_headers() {
        let (_dir, path) = write_temp("dup.csv", "a,b,a\n1,2,3\n");

        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("duplicate column name"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.csv");

        assert!(load_file(&path).is_err());
    }
}
