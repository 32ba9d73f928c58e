//! CSV table reader.
//!
//! CSV has no types, so cells are interpreted conservatively:
//! - an empty cell is null;
//! - a cell starting with `[` or `{` that parses as JSON becomes that array
//!   or object (list and mapping columns are usually written this way);
//! - everything else stays text. Numeric fields still load because the
//!   numeric coercions parse text.

use crate::io::compression::auto_detect_reader;
use crate::table::{Cell, Table};
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs::File;
use std::path::Path;

/// Read a CSV file with a header row into a [`Table`].
///
/// **Compression**: gzip and zstd inputs are detected by extension or magic
/// bytes when the matching feature is enabled.
///
/// # Errors
/// Returns an error if the file cannot be opened or a record is malformed
/// (including rows whose width differs from the header).
pub fn read_csv_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let rdr = auto_detect_reader(f, path)
        .with_context(|| format!("setup decompression for {}", path.display()))?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(rdr);
    let headers = rdr
        .headers()
        .with_context(|| format!("read CSV header of {}", path.display()))?
        .clone();
    let mut table = Table::new(headers.iter());
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("parse CSV record #{} in {}", i + 1, path.display()))?;
        table
            .push_row(rec.iter().map(parse_cell).collect())
            .with_context(|| format!("CSV record #{} in {}", i + 1, path.display()))?;
    }
    tracing::debug!(path = %path.display(), rows = table.len(), "read CSV table");
    Ok(table)
}

fn parse_cell(raw: &str) -> Cell {
    if raw.is_empty() {
        return Value::Null;
    }
    let trimmed = raw.trim_start();
    if (trimmed.starts_with('[') || trimmed.starts_with('{'))
        && let Ok(v) = serde_json::from_str::<Value>(raw)
    {
        return v;
    }
    Value::String(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cells_are_interpreted() {
        assert_eq!(parse_cell(""), Value::Null);
        assert_eq!(parse_cell("12"), json!("12"));
        assert_eq!(parse_cell("[\"a\", \"b\"]"), json!(["a", "b"]));
        assert_eq!(parse_cell("{\"k\": \"v\"}"), json!({"k": "v"}));
        assert_eq!(parse_cell("[not json"), json!("[not json"));
    }
}
