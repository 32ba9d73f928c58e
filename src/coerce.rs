//! Per-field coercion helpers.
//!
//! Each helper reads one field from a [`Row`] given the column it is bound to
//! (`None` means "no column") and converts the raw cell to the field's type.
//!
//! Absence rules shared by every optional helper: an unbound field, a column
//! the table does not have, and a null cell all yield `None`. Required
//! helpers turn a null cell into [`LoadError::Coercion`]; a missing required
//! column is reported by [`require_columns`] before any row is read.

use crate::error::{LoadError, LoadResult};
use crate::table::{Cell, Row, Table};
use serde_json::Value;
use std::collections::HashMap;

/// Conversion from a raw cell to a typed value.
///
/// Implemented for the item types the loaders need: `String`, `i64`, `f64`
/// and [`Cell`] itself (pass-through).
pub trait FromCell: Sized {
    /// Name of the target type used in error messages.
    const EXPECTED: &'static str;

    /// Convert a non-null cell, or return `None` if it cannot be converted.
    fn from_cell(cell: &Cell) -> Option<Self>;
}

impl FromCell for String {
    const EXPECTED: &'static str = "string";

    fn from_cell(cell: &Cell) -> Option<Self> {
        match cell {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Array(_) | Value::Object(_) => Some(cell.to_string()),
        }
    }
}

impl FromCell for i64 {
    const EXPECTED: &'static str = "int";

    fn from_cell(cell: &Cell) -> Option<Self> {
        match cell {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(truncate))
            }
            _ => None,
        }
    }
}

impl FromCell for f64 {
    const EXPECTED: &'static str = "float";

    fn from_cell(cell: &Cell) -> Option<Self> {
        match cell {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

impl FromCell for Cell {
    const EXPECTED: &'static str = "value";

    fn from_cell(cell: &Cell) -> Option<Self> {
        Some(cell.clone())
    }
}

fn truncate(f: f64) -> Option<i64> {
    // `as` saturates, so range-check first
    (f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64).then(|| f.trunc() as i64)
}

/// Fail with [`LoadError::MissingColumn`] for the first required binding
/// whose column is not in the table schema.
///
/// # Errors
/// See above; unbound (`None`) required fields fail as well.
pub fn require_columns(
    table: &Table,
    bindings: &[(&'static str, Option<&str>)],
) -> LoadResult<()> {
    for &(field, column) in bindings {
        match column {
            Some(c) if table.has_column(c) => {}
            _ => return Err(LoadError::missing_column(field, column)),
        }
    }
    Ok(())
}

/// Look up a bound, present, non-null cell.
fn present<'a>(row: &Row<'a>, column: Option<&str>) -> Option<&'a Cell> {
    column
        .and_then(|c| row.get(c))
        .filter(|v| !v.is_null())
}

fn coerce<T: FromCell>(
    row: &Row<'_>,
    field: &'static str,
    column: &str,
    cell: &Cell,
) -> LoadResult<T> {
    T::from_cell(cell).ok_or_else(|| {
        LoadError::coercion(row.position(), field, column, T::EXPECTED, cell.to_string())
    })
}

/// Required string field.
///
/// # Errors
/// [`LoadError::MissingColumn`] if the column is unbound or absent,
/// [`LoadError::Coercion`] if the cell is null.
pub fn to_str(row: &Row<'_>, field: &'static str, column: Option<&str>) -> LoadResult<String> {
    let Some(c) = column else {
        return Err(LoadError::missing_column(field, None));
    };
    let cell = row
        .get(c)
        .ok_or_else(|| LoadError::missing_column(field, Some(c)))?;
    coerce(row, field, c, cell)
}

/// Optional string field.
///
/// # Errors
/// Never fails in practice; every non-null cell has a textual form.
pub fn to_optional_str(
    row: &Row<'_>,
    field: &'static str,
    column: Option<&str>,
) -> LoadResult<Option<String>> {
    to_optional(row, field, column)
}

/// Optional integer field. Floats truncate toward zero; numeric text parses.
///
/// # Errors
/// [`LoadError::Coercion`] if the cell is not numeric.
pub fn to_optional_int(
    row: &Row<'_>,
    field: &'static str,
    column: Option<&str>,
) -> LoadResult<Option<i64>> {
    to_optional(row, field, column)
}

/// Optional float field.
///
/// # Errors
/// [`LoadError::Coercion`] if the cell is not numeric.
pub fn to_optional_float(
    row: &Row<'_>,
    field: &'static str,
    column: Option<&str>,
) -> LoadResult<Option<f64>> {
    to_optional(row, field, column)
}

fn to_optional<T: FromCell>(
    row: &Row<'_>,
    field: &'static str,
    column: Option<&str>,
) -> LoadResult<Option<T>> {
    match (column, present(row, column)) {
        (Some(c), Some(cell)) => coerce(row, field, c, cell).map(Some),
        _ => Ok(None),
    }
}

/// Optional list field.
///
/// Arrays are coerced element-wise, preserving order. A scalar cell is
/// wrapped into a single-element list rather than rejected.
///
/// # Errors
/// [`LoadError::Coercion`] if any element cannot be coerced to `T`.
pub fn to_optional_list<T: FromCell>(
    row: &Row<'_>,
    field: &'static str,
    column: Option<&str>,
) -> LoadResult<Option<Vec<T>>> {
    let (Some(c), Some(cell)) = (column, present(row, column)) else {
        return Ok(None);
    };
    match cell {
        Value::Array(items) => items
            .iter()
            .map(|item| coerce(row, field, c, item))
            .collect::<LoadResult<Vec<T>>>()
            .map(Some),
        Value::Object(_) => Err(LoadError::coercion(
            row.position(),
            field,
            c,
            "list",
            cell.to_string(),
        )),
        scalar => coerce(row, field, c, scalar).map(|v| Some(vec![v])),
    }
}

/// List field that defaults to an empty list when unbound, absent or null.
///
/// # Errors
/// Same as [`to_optional_list`].
pub fn to_list<T: FromCell>(
    row: &Row<'_>,
    field: &'static str,
    column: Option<&str>,
) -> LoadResult<Vec<T>> {
    Ok(to_optional_list(row, field, column)?.unwrap_or_default())
}

/// Optional mapping field with string keys and values coerced to `V`.
///
/// Values are not checked against other tables; the mapping is copied as-is.
///
/// # Errors
/// [`LoadError::Coercion`] if the cell is not an object or a value cannot be
/// coerced to `V`.
pub fn to_optional_dict<V: FromCell>(
    row: &Row<'_>,
    field: &'static str,
    column: Option<&str>,
) -> LoadResult<Option<HashMap<String, V>>> {
    let (Some(c), Some(cell)) = (column, present(row, column)) else {
        return Ok(None);
    };
    let Value::Object(map) = cell else {
        return Err(LoadError::coercion(
            row.position(),
            field,
            c,
            "mapping",
            cell.to_string(),
        ));
    };
    map.iter()
        .map(|(k, v)| coerce(row, field, c, v).map(|v| (k.clone(), v)))
        .collect::<LoadResult<HashMap<String, V>>>()
        .map(Some)
}

/// Human-readable id: the bound column's text, or the row position.
///
/// # Errors
/// Never fails in practice; see [`to_optional_str`].
pub fn short_id(row: &Row<'_>, column: Option<&str>) -> LoadResult<Option<String>> {
    Ok(Some(
        to_optional_str(row, "short_id", column)?.unwrap_or_else(|| row.position().to_string()),
    ))
}

/// Copy the listed columns verbatim. Missing columns map to null; an empty
/// list yields `None`.
#[must_use]
pub fn attributes(row: &Row<'_>, columns: &[String]) -> Option<HashMap<String, Cell>> {
    if columns.is_empty() {
        return None;
    }
    Some(
        columns
            .iter()
            .map(|c| (c.clone(), row.get_or_null(c).clone()))
            .collect(),
    )
}
