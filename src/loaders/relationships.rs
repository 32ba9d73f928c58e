use super::{col, load_rows};
use crate::coerce::{
    attributes, require_columns, short_id, to_optional_float, to_optional_int, to_optional_list,
    to_optional_str, to_str,
};
use crate::error::LoadResult;
use crate::model::Relationship;
use crate::table::Table;
use serde::{Deserialize, Serialize};

/// Column bindings for [`load_relationships`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipColumns {
    pub id: String,
    pub short_id: Option<String>,
    pub source: String,
    pub target: String,
    pub description: Option<String>,
    pub rank: Option<String>,
    pub description_embedding: Option<String>,
    pub weight: Option<String>,
    pub text_unit_ids: Option<String>,
    pub attributes: Vec<String>,
}

impl Default for RelationshipColumns {
    fn default() -> Self {
        Self {
            id: "id".into(),
            short_id: col("human_readable_id"),
            source: "source".into(),
            target: "target".into(),
            description: col("description"),
            rank: col("combined_degree"),
            description_embedding: col("description_embedding"),
            weight: col("weight"),
            text_unit_ids: col("text_unit_ids"),
            attributes: Vec::new(),
        }
    }
}

/// Load one [`Relationship`] per table row.
///
/// # Errors
/// `MissingColumn` if `id`, `source` or `target` is not a table column;
/// `Coercion` on the first cell that does not fit its field.
pub fn load_relationships(
    table: &Table,
    cols: &RelationshipColumns,
) -> LoadResult<Vec<Relationship>> {
    require_columns(
        table,
        &[
            ("id", Some(cols.id.as_str())),
            ("source", Some(cols.source.as_str())),
            ("target", Some(cols.target.as_str())),
        ],
    )?;
    load_rows("relationship", table, |row| {
        Ok(Relationship {
            id: to_str(row, "id", Some(cols.id.as_str()))?,
            short_id: short_id(row, cols.short_id.as_deref())?,
            source: to_str(row, "source", Some(cols.source.as_str()))?,
            target: to_str(row, "target", Some(cols.target.as_str()))?,
            description: to_optional_str(row, "description", cols.description.as_deref())?,
            description_embedding: to_optional_list(
                row,
                "description_embedding",
                cols.description_embedding.as_deref(),
            )?,
            weight: to_optional_float(row, "weight", cols.weight.as_deref())?,
            text_unit_ids: to_optional_list(row, "text_unit_ids", cols.text_unit_ids.as_deref())?,
            rank: to_optional_int(row, "rank", cols.rank.as_deref())?,
            attributes: attributes(row, &cols.attributes),
        })
    })
}
