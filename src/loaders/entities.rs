use super::{col, load_rows};
use crate::coerce::{
    attributes, require_columns, short_id, to_optional_int, to_optional_list, to_optional_str,
    to_str,
};
use crate::error::LoadResult;
use crate::model::Entity;
use crate::table::Table;
use serde::{Deserialize, Serialize};

/// Column bindings for [`load_entities`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityColumns {
    pub id: String,
    pub short_id: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
    pub description: Option<String>,
    pub name_embedding: Option<String>,
    pub description_embedding: Option<String>,
    pub community_ids: Option<String>,
    pub text_unit_ids: Option<String>,
    pub rank: Option<String>,
    pub attributes: Vec<String>,
}

impl Default for EntityColumns {
    fn default() -> Self {
        Self {
            id: "id".into(),
            short_id: col("human_readable_id"),
            title: "title".into(),
            entity_type: col("type"),
            description: col("description"),
            name_embedding: col("name_embedding"),
            description_embedding: col("description_embedding"),
            community_ids: col("community_ids"),
            text_unit_ids: col("text_unit_ids"),
            rank: col("degree"),
            attributes: Vec::new(),
        }
    }
}

/// Load one [`Entity`] per table row.
///
/// # Errors
/// [`LoadError::MissingColumn`](crate::LoadError::MissingColumn) if `id` or
/// `title` is not a table column; [`LoadError::Coercion`](crate::LoadError::Coercion)
/// on the first cell that does not fit its field.
pub fn load_entities(table: &Table, cols: &EntityColumns) -> LoadResult<Vec<Entity>> {
    require_columns(
        table,
        &[("id", Some(cols.id.as_str())), ("title", Some(cols.title.as_str()))],
    )?;
    load_rows("entity", table, |row| {
        Ok(Entity {
            id: to_str(row, "id", Some(cols.id.as_str()))?,
            short_id: short_id(row, cols.short_id.as_deref())?,
            title: to_str(row, "title", Some(cols.title.as_str()))?,
            entity_type: to_optional_str(row, "type", cols.entity_type.as_deref())?,
            description: to_optional_str(row, "description", cols.description.as_deref())?,
            name_embedding: to_optional_list(
                row,
                "name_embedding",
                cols.name_embedding.as_deref(),
            )?,
            description_embedding: to_optional_list(
                row,
                "description_embedding",
                cols.description_embedding.as_deref(),
            )?,
            community_ids: to_optional_list(row, "community_ids", cols.community_ids.as_deref())?,
            text_unit_ids: to_optional_list(row, "text_unit_ids", cols.text_unit_ids.as_deref())?,
            rank: to_optional_int(row, "rank", cols.rank.as_deref())?,
            attributes: attributes(row, &cols.attributes),
        })
    })
}
