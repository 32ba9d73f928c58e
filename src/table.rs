//! In-memory, column-named tables.
//!
//! A [`Table`] is the loaders' only input: a rectangular grid of JSON-like
//! cells ([`Cell`] is `serde_json::Value`) with a fixed, ordered set of column
//! names. Rows are always indexed by position `0..len()`; that position is the
//! row index the loaders fall back to for `short_id`.
//!
//! Tables are built directly ([`Table::from_rows`], [`Table::push_row`]) or
//! from a list of JSON objects ([`Table::from_records`]), which is what the
//! file readers in [`crate::io`] produce.

use anyhow::{Result, ensure};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A single raw cell value.
pub type Cell = Value;

static NULL: Cell = Value::Null;

/// A rectangular table with named columns and positionally indexed rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given columns.
    ///
    /// Duplicate column names resolve to the first occurrence on lookup.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(columns.len());
        for (i, c) in columns.iter().enumerate() {
            index.entry(c.clone()).or_insert(i);
        }
        Self {
            columns,
            index,
            rows: Vec::new(),
        }
    }

    /// Create a table from columns and rows.
    ///
    /// # Errors
    /// Returns an error if any row's width differs from the column count.
    pub fn from_rows<I, S>(columns: I, rows: Vec<Vec<Cell>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(columns);
        table.rows.reserve(rows.len());
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Build a table from JSON objects, one per row.
    ///
    /// Columns are the union of all keys in first-seen order; keys missing
    /// from a record become null cells.
    #[must_use]
    pub fn from_records(records: Vec<Map<String, Value>>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut seen = std::collections::HashSet::new();
        for rec in &records {
            for k in rec.keys() {
                if seen.insert(k.as_str()) {
                    columns.push(k.clone());
                }
            }
        }
        Self::from_records_with_columns(columns, records)
    }

    /// Build a table from JSON objects with a known column list.
    ///
    /// Keys not listed in `columns` are appended as extra columns in
    /// first-seen order, so no data is dropped. Columns absent from a
    /// record are null.
    #[must_use]
    pub fn from_records_with_columns<I, S>(columns: I, records: Vec<Map<String, Value>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        for rec in &records {
            for k in rec.keys() {
                if !columns.iter().any(|c| c == k) {
                    columns.push(k.clone());
                }
            }
        }
        let rows: Vec<Vec<Cell>> = records
            .into_iter()
            .map(|mut rec| {
                columns
                    .iter()
                    .map(|c| rec.remove(c).unwrap_or(Value::Null))
                    .collect()
            })
            .collect();
        let mut table = Self::new(columns);
        table.rows = rows;
        table
    }

    /// Concatenate tables vertically.
    ///
    /// The result has the union of all columns (first-seen order); cells of
    /// columns a source table lacks are null. Row order is preserved.
    #[must_use]
    pub fn concat(tables: Vec<Table>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for t in &tables {
            for c in &t.columns {
                if !columns.contains(c) {
                    columns.push(c.clone());
                }
            }
        }
        let mut out = Self::new(columns);
        for t in tables {
            let mapping: Vec<Option<usize>> = out
                .columns
                .iter()
                .map(|c| t.column_index(c))
                .collect();
            for row in t.rows {
                out.rows.push(
                    mapping
                        .iter()
                        .map(|m| m.map_or(Value::Null, |i| row[i].clone()))
                        .collect(),
                );
            }
        }
        out
    }

    /// Append a row.
    ///
    /// # Errors
    /// Returns an error if the row's width differs from the column count.
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<()> {
        ensure!(
            row.len() == self.columns.len(),
            "row {} has {} cells but the table has {} columns",
            self.rows.len(),
            row.len(),
            self.columns.len()
        );
        self.rows.push(row);
        Ok(())
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// View the row at `position`, if any.
    #[must_use]
    pub fn row(&self, position: usize) -> Option<Row<'_>> {
        (position < self.rows.len()).then_some(Row {
            table: self,
            position,
        })
    }

    /// Iterate rows in positional order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = Row<'_>> + '_ {
        (0..self.rows.len()).map(move |position| Row {
            table: self,
            position,
        })
    }

    /// Iterate one column's cells in row order, or `None` if the column
    /// does not exist.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Cell> + '_> {
        let i = self.column_index(name)?;
        Some(self.rows.iter().map(move |r| &r[i]))
    }
}

/// A borrowed row mapping: column name to raw cell, plus the row position.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    position: usize,
}

impl<'a> Row<'a> {
    /// Zero-based position of this row in its table.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The raw cell under `column`, or `None` if the table has no such column.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&'a Cell> {
        let i = self.table.column_index(column)?;
        Some(&self.table.rows[self.position][i])
    }

    /// The raw cell under `column`, with absent columns read as null.
    #[must_use]
    pub fn get_or_null(&self, column: &str) -> &'a Cell {
        self.get(column).unwrap_or(&NULL)
    }

    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.table.has_column(column)
    }

    /// Copy the row into an owned column → cell map.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        self.table
            .columns
            .iter()
            .zip(&self.table.rows[self.position])
            .map(|(c, v)| (c.clone(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Table::from_rows(["a", "b"], vec![vec![json!(1)]]).unwrap_err();
        assert!(err.to_string().contains("has 1 cells"));
    }

    #[test]
    fn records_union_columns_in_first_seen_order() {
        let t = Table::from_records(vec![
            obj(json!({"id": "a", "x": 1})),
            obj(json!({"id": "b", "y": 2})),
        ]);
        assert_eq!(t.columns(), &["id", "x", "y"]);
        let second = t.row(1).unwrap();
        assert_eq!(second.get("x"), Some(&Value::Null));
        assert_eq!(second.get("y"), Some(&json!(2)));
        assert_eq!(second.get("z"), None);
    }

    #[test]
    fn known_columns_survive_all_null_data() {
        let t = Table::from_records_with_columns(["id", "empty"], vec![obj(json!({"id": "a"}))]);
        assert!(t.has_column("empty"));
        assert_eq!(t.row(0).unwrap().get_or_null("empty"), &Value::Null);
    }

    #[test]
    fn rows_are_positional() {
        let t = Table::from_rows(["v"], vec![vec![json!("a")], vec![json!("b")]]).unwrap();
        let positions: Vec<usize> = t.rows().map(|r| r.position()).collect();
        assert_eq!(positions, vec![0, 1]);
        assert!(t.row(2).is_none());
        let col: Vec<&Cell> = t.column("v").unwrap().collect();
        assert_eq!(col, vec![&json!("a"), &json!("b")]);
    }

    #[test]
    fn concat_fills_missing_columns_with_null() {
        let a = Table::from_rows(["id"], vec![vec![json!("a")]]).unwrap();
        let b = Table::from_rows(["id", "w"], vec![vec![json!("b"), json!(2.5)]]).unwrap();
        let t = Table::concat(vec![a, b]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.row(0).unwrap().get("w"), Some(&Value::Null));
        assert_eq!(t.row(1).unwrap().to_map().get("w"), Some(&json!(2.5)));
    }
}
