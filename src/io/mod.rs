//! File readers producing [`Table`]s.
//!
//! Each format is behind a feature flag (`io-jsonl`, `io-csv`, `io-parquet`).
//! [`read_table`] picks the reader from the file extension and
//! [`read_table_glob`] concatenates every file matching a pattern.

pub mod compression;

#[cfg_attr(docsrs, doc(cfg(feature = "io-jsonl")))]
#[cfg(feature = "io-jsonl")]
pub mod jsonl;

#[cfg_attr(docsrs, doc(cfg(feature = "io-csv")))]
#[cfg(feature = "io-csv")]
pub mod csv;

#[cfg_attr(docsrs, doc(cfg(feature = "io-parquet")))]
#[cfg(feature = "io-parquet")]
pub mod parquet;

use crate::table::Table;
use anyhow::{Context, Result, bail};
use compression::strip_compression_suffix;
use std::path::{Path, PathBuf};

/// Read a table, choosing the format from the extension.
///
/// Recognized: `.jsonl`/`.ndjson`, `.csv`, `.parquet`, each optionally
/// followed by a compression suffix (`.gz`, `.zst`) for the text formats.
///
/// # Errors
/// Returns an error for unknown extensions, formats whose feature is
/// disabled, or any reader failure.
pub fn read_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let name = strip_compression_suffix(path);
    let ext = name.rsplit_once('.').map(|(_, e)| e).unwrap_or_default();
    match ext {
        #[cfg(feature = "io-jsonl")]
        "jsonl" | "ndjson" => jsonl::read_jsonl_table(path),
        #[cfg(feature = "io-csv")]
        "csv" => csv::read_csv_table(path),
        #[cfg(feature = "io-parquet")]
        "parquet" => parquet::read_parquet_table(path),
        _ => bail!("unsupported table format: {}", path.display()),
    }
}

/// Read every file matching `pattern` (sorted by path) and concatenate them.
///
/// # Errors
/// Returns an error if the pattern is invalid, matches nothing, or any file
/// fails to read.
pub fn read_table_glob(pattern: &str) -> Result<Table> {
    let mut paths: Vec<PathBuf> = glob::glob(pattern)
        .with_context(|| format!("invalid glob pattern {pattern}"))?
        .collect::<std::result::Result<Vec<PathBuf>, _>>()
        .with_context(|| format!("expand glob {pattern}"))?;
    paths.retain(|p| p.is_file());
    if paths.is_empty() {
        bail!("no files match {pattern}");
    }
    paths.sort();
    let tables = paths
        .iter()
        .map(|p| read_table(p).with_context(|| format!("read {}", p.display())))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(pattern, files = tables.len(), "read table glob");
    Ok(Table::concat(tables))
}
