use super::{col, load_rows};
use crate::coerce::{
    attributes, require_columns, to_optional_dict, to_optional_int, to_optional_list, to_str,
};
use crate::error::LoadResult;
use crate::model::TextUnit;
use crate::table::Table;
use serde::{Deserialize, Serialize};

/// Column bindings for [`load_text_units`].
///
/// There is no `short_id` binding: text units always use the row position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextUnitColumns {
    pub id: String,
    pub text: String,
    pub entity_ids: Option<String>,
    pub relationship_ids: Option<String>,
    pub covariate_ids: Option<String>,
    pub n_tokens: Option<String>,
    pub document_ids: Option<String>,
    pub attributes: Vec<String>,
}

impl Default for TextUnitColumns {
    fn default() -> Self {
        Self {
            id: "id".into(),
            text: "text".into(),
            entity_ids: col("entity_ids"),
            relationship_ids: col("relationship_ids"),
            covariate_ids: col("covariate_ids"),
            n_tokens: col("n_tokens"),
            document_ids: col("document_ids"),
            attributes: vec!["metadata".into()],
        }
    }
}

/// Load one [`TextUnit`] per table row.
///
/// # Errors
/// `MissingColumn` if `id` or `text` is not a table column; `Coercion` on the
/// first cell that does not fit its field.
pub fn load_text_units(table: &Table, cols: &TextUnitColumns) -> LoadResult<Vec<TextUnit>> {
    require_columns(
        table,
        &[("id", Some(cols.id.as_str())), ("text", Some(cols.text.as_str()))],
    )?;
    load_rows("text_unit", table, |row| {
        Ok(TextUnit {
            id: to_str(row, "id", Some(cols.id.as_str()))?,
            short_id: Some(row.position().to_string()),
            text: to_str(row, "text", Some(cols.text.as_str()))?,
            entity_ids: to_optional_list(row, "entity_ids", cols.entity_ids.as_deref())?,
            relationship_ids: to_optional_list(
                row,
                "relationship_ids",
                cols.relationship_ids.as_deref(),
            )?,
            covariate_ids: to_optional_dict(row, "covariate_ids", cols.covariate_ids.as_deref())?,
            n_tokens: to_optional_int(row, "n_tokens", cols.n_tokens.as_deref())?,
            document_ids: to_optional_list(row, "document_ids", cols.document_ids.as_deref())?,
            attributes: attributes(row, &cols.attributes),
        })
    })
}
