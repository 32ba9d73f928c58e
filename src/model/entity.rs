use super::Attributes;
use serde::{Deserialize, Serialize};

/// A named node in the knowledge graph (person, organization, concept, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    /// Human-readable id used in prompts and citations.
    pub short_id: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
    pub description: Option<String>,
    pub name_embedding: Option<Vec<f64>>,
    pub description_embedding: Option<Vec<f64>>,
    pub community_ids: Option<Vec<String>>,
    pub text_unit_ids: Option<Vec<String>>,
    /// Graph degree; higher means more central.
    pub rank: Option<i64>,
    pub attributes: Option<Attributes>,
}
