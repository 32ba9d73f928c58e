//! Parquet table reader.
//!
//! Record batches are decoded with `parquet`'s Arrow reader and turned into
//! JSON rows with Arrow's JSON writer, so nested list and map columns arrive
//! as JSON arrays and objects. Columns come from the file schema, which keeps
//! all-null columns visible to the loaders.

use crate::table::Table;
use anyhow::{Context, Result};
use arrow::json::ArrayWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::{Map, Value};
use std::fs::File;
use std::path::Path;

/// Read a Parquet file into a [`Table`].
///
/// # Errors
/// Returns an error if the file cannot be opened, is not valid Parquet, or a
/// batch cannot be converted to JSON rows.
pub fn read_parquet_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .with_context(|| format!("open ParquetRecordBatchReader for {}", path.display()))?;
    let columns: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder
        .with_batch_size(64 * 1024)
        .build()
        .context("build ParquetRecordBatchReader")?;

    let mut writer = ArrayWriter::new(Vec::new());
    for batch in reader {
        let batch = batch.with_context(|| format!("read batch from {}", path.display()))?;
        writer
            .write(&batch)
            .context("convert RecordBatch to JSON rows")?;
    }
    writer.finish().context("finish JSON rows")?;
    let buf = writer.into_inner();
    let records: Vec<Map<String, Value>> =
        serde_json::from_slice(&buf).context("decode JSON rows")?;

    tracing::debug!(path = %path.display(), rows = records.len(), "read Parquet table");
    Ok(Table::from_records_with_columns(columns, records))
}
