use super::{col, load_rows};
use crate::coerce::{
    attributes, require_columns, short_id, to_list, to_optional_dict, to_optional_list, to_str,
};
use crate::error::LoadResult;
use crate::model::Community;
use crate::table::Table;
use serde::{Deserialize, Serialize};

/// Column bindings for [`load_communities`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityColumns {
    pub id: String,
    pub short_id: Option<String>,
    pub title: String,
    pub level: String,
    pub entity_ids: Option<String>,
    pub relationship_ids: Option<String>,
    pub covariate_ids: Option<String>,
    /// Read as a required string: unbinding it fails the load.
    pub parent: Option<String>,
    pub children: Option<String>,
    pub attributes: Vec<String>,
}

impl Default for CommunityColumns {
    fn default() -> Self {
        Self {
            id: "id".into(),
            short_id: col("community"),
            title: "title".into(),
            level: "level".into(),
            entity_ids: col("entity_ids"),
            relationship_ids: col("relationship_ids"),
            covariate_ids: col("covariate_ids"),
            parent: col("parent"),
            children: col("children"),
            attributes: Vec::new(),
        }
    }
}

/// Load one [`Community`] per table row.
///
/// # Errors
/// `MissingColumn` if `id`, `title`, `level` or `parent` is unbound or not a
/// table column; `Coercion` on the first cell that does not fit its field.
pub fn load_communities(table: &Table, cols: &CommunityColumns) -> LoadResult<Vec<Community>> {
    require_columns(
        table,
        &[
            ("id", Some(cols.id.as_str())),
            ("title", Some(cols.title.as_str())),
            ("level", Some(cols.level.as_str())),
            ("parent", cols.parent.as_deref()),
        ],
    )?;
    load_rows("community", table, |row| {
        Ok(Community {
            id: to_str(row, "id", Some(cols.id.as_str()))?,
            short_id: short_id(row, cols.short_id.as_deref())?,
            title: to_str(row, "title", Some(cols.title.as_str()))?,
            level: to_str(row, "level", Some(cols.level.as_str()))?,
            parent: to_str(row, "parent", cols.parent.as_deref())?,
            children: to_list(row, "children", cols.children.as_deref())?,
            entity_ids: to_optional_list(row, "entity_ids", cols.entity_ids.as_deref())?,
            relationship_ids: to_optional_list(
                row,
                "relationship_ids",
                cols.relationship_ids.as_deref(),
            )?,
            covariate_ids: to_optional_dict(row, "covariate_ids", cols.covariate_ids.as_deref())?,
            attributes: attributes(row, &cols.attributes),
        })
    })
}
