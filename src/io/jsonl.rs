//! JSON Lines table reader.

use crate::io::compression::auto_detect_reader;
use crate::table::Table;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a JSONL file into a [`Table`], one JSON object per line.
///
/// Empty and whitespace-only lines are skipped. Columns are the union of all
/// object keys in first-seen order.
///
/// **Compression**: gzip and zstd inputs are detected by extension or magic
/// bytes when the matching feature is enabled.
///
/// # Errors
/// Returns an error if the file cannot be read or a line is not a JSON
/// object. Errors carry the line number.
pub fn read_jsonl_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let rdr = auto_detect_reader(f, path)
        .with_context(|| format!("setup decompression for {}", path.display()))?;
    let mut records = Vec::new();
    for (i, line) in BufReader::new(rdr).lines().enumerate() {
        let line = line.with_context(|| format!("read line {} in {}", i + 1, path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let v: Value = serde_json::from_str(&line)
            .with_context(|| format!("parse JSONL line {} in {}", i + 1, path.display()))?;
        let Value::Object(obj) = v else {
            bail!("JSONL line {} in {} is not an object", i + 1, path.display());
        };
        records.push(obj);
    }
    tracing::debug!(path = %path.display(), rows = records.len(), "read JSONL table");
    Ok(Table::from_records(records))
}
