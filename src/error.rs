//! Error type for the record loaders.
//!
//! Loading fails in exactly two ways: a required field is bound to a column
//! the table does not have, or a cell cannot be coerced to the field's type.
//! Either one aborts the whole load call; no rows are skipped.

use std::error::Error;
use std::fmt;

/// Error raised by the `load_*` functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// A required field's column is not part of the table schema, or the
    /// field was bound to no column at all (`column` is `None`).
    MissingColumn {
        field: &'static str,
        column: Option<String>,
    },
    /// A present cell could not be converted to the field's declared type.
    Coercion {
        /// Zero-based row position.
        row: usize,
        field: &'static str,
        column: String,
        /// Human-readable name of the target type, e.g. `"int"`.
        expected: &'static str,
        /// Compact JSON rendering of the offending cell.
        found: String,
    },
}

impl LoadError {
    pub fn missing_column(field: &'static str, column: Option<&str>) -> Self {
        Self::MissingColumn {
            field,
            column: column.map(str::to_string),
        }
    }

    pub fn coercion(
        row: usize,
        field: &'static str,
        column: &str,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::Coercion {
            row,
            field,
            column: column.to_string(),
            expected,
            found: found.into(),
        }
    }

    /// The field the error was raised for.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingColumn { field, .. } | Self::Coercion { field, .. } => *field,
        }
    }

    #[must_use]
    pub fn is_missing_column(&self) -> bool {
        matches!(self, Self::MissingColumn { .. })
    }

    #[must_use]
    pub fn is_coercion(&self) -> bool {
        matches!(self, Self::Coercion { .. })
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn {
                field,
                column: Some(column),
            } => write!(f, "missing column [{column}] for required field `{field}`"),
            Self::MissingColumn { field, column: None } => {
                write!(f, "required field `{field}` is not bound to any column")
            }
            Self::Coercion {
                row,
                field,
                column,
                expected,
                found,
            } => write!(
                f,
                "row {row}: cannot coerce column [{column}] to {expected} for field `{field}` (found {found})"
            ),
        }
    }
}

impl Error for LoadError {}

pub type LoadResult<T> = Result<T, LoadError>;
