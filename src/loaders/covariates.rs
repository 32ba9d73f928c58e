use super::{col, load_rows};
use crate::coerce::{
    attributes, require_columns, short_id, to_optional_list, to_optional_str, to_str,
};
use crate::error::LoadResult;
use crate::model::Covariate;
use crate::table::Table;
use serde::{Deserialize, Serialize};

/// Covariate type used when no type column is bound or present.
pub const DEFAULT_COVARIATE_TYPE: &str = "claim";

/// Column bindings for [`load_covariates`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CovariateColumns {
    pub id: String,
    pub short_id: Option<String>,
    pub subject_id: String,
    #[serde(rename = "type")]
    pub covariate_type: Option<String>,
    pub text_unit_ids: Option<String>,
    pub attributes: Vec<String>,
}

impl Default for CovariateColumns {
    fn default() -> Self {
        Self {
            id: "id".into(),
            short_id: col("human_readable_id"),
            subject_id: "subject_id".into(),
            covariate_type: col("type"),
            text_unit_ids: col("text_unit_ids"),
            attributes: Vec::new(),
        }
    }
}

/// Load one [`Covariate`] per table row.
///
/// `covariate_type` is `"claim"` unless the bound type column exists and
/// holds a value.
///
/// # Errors
/// `MissingColumn` if `id` or `subject_id` is not a table column;
/// `Coercion` on the first cell that does not fit its field.
pub fn load_covariates(table: &Table, cols: &CovariateColumns) -> LoadResult<Vec<Covariate>> {
    require_columns(
        table,
        &[
            ("id", Some(cols.id.as_str())),
            ("subject_id", Some(cols.subject_id.as_str())),
        ],
    )?;
    load_rows("covariate", table, |row| {
        Ok(Covariate {
            id: to_str(row, "id", Some(cols.id.as_str()))?,
            short_id: short_id(row, cols.short_id.as_deref())?,
            subject_id: to_str(row, "subject_id", Some(cols.subject_id.as_str()))?,
            covariate_type: to_optional_str(
                row,
                "covariate_type",
                cols.covariate_type.as_deref(),
            )?
            .unwrap_or_else(|| DEFAULT_COVARIATE_TYPE.to_string()),
            text_unit_ids: to_optional_list(row, "text_unit_ids", cols.text_unit_ids.as_deref())?,
            attributes: attributes(row, &cols.attributes),
        })
    })
}
