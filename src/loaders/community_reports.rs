use super::{col, load_rows};
use crate::coerce::{
    attributes, require_columns, short_id, to_optional_float, to_optional_list, to_str,
};
use crate::error::LoadResult;
use crate::model::CommunityReport;
use crate::table::Table;
use serde::{Deserialize, Serialize};

/// Column bindings for [`load_community_reports`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityReportColumns {
    pub id: String,
    pub short_id: Option<String>,
    pub title: String,
    pub community_id: String,
    pub summary: String,
    pub full_content: String,
    pub rank: Option<String>,
    pub full_content_embedding: Option<String>,
    pub attributes: Vec<String>,
}

impl Default for CommunityReportColumns {
    fn default() -> Self {
        Self {
            id: "id".into(),
            short_id: col("community"),
            title: "title".into(),
            community_id: "community".into(),
            summary: "summary".into(),
            full_content: "full_content".into(),
            rank: col("rank"),
            full_content_embedding: col("full_content_embedding"),
            attributes: Vec::new(),
        }
    }
}

/// Load one [`CommunityReport`] per table row.
///
/// # Errors
/// `MissingColumn` if any of `id`, `title`, `community_id`, `summary` or
/// `full_content` is not a table column; `Coercion` on the first cell that
/// does not fit its field.
pub fn load_community_reports(
    table: &Table,
    cols: &CommunityReportColumns,
) -> LoadResult<Vec<CommunityReport>> {
    require_columns(
        table,
        &[
            ("id", Some(cols.id.as_str())),
            ("title", Some(cols.title.as_str())),
            ("community_id", Some(cols.community_id.as_str())),
            ("summary", Some(cols.summary.as_str())),
            ("full_content", Some(cols.full_content.as_str())),
        ],
    )?;
    load_rows("community_report", table, |row| {
        Ok(CommunityReport {
            id: to_str(row, "id", Some(cols.id.as_str()))?,
            short_id: short_id(row, cols.short_id.as_deref())?,
            title: to_str(row, "title", Some(cols.title.as_str()))?,
            community_id: to_str(row, "community_id", Some(cols.community_id.as_str()))?,
            summary: to_str(row, "summary", Some(cols.summary.as_str()))?,
            full_content: to_str(row, "full_content", Some(cols.full_content.as_str()))?,
            rank: to_optional_float(row, "rank", cols.rank.as_deref())?,
            full_content_embedding: to_optional_list(
                row,
                "full_content_embedding",
                cols.full_content_embedding.as_deref(),
            )?,
            attributes: attributes(row, &cols.attributes),
        })
    })
}
