use super::Attributes;
use serde::{Deserialize, Serialize};

/// A directed edge between two entities, referenced by title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: String,
    pub short_id: Option<String>,
    pub source: String,
    pub target: String,
    pub description: Option<String>,
    pub description_embedding: Option<Vec<f64>>,
    pub weight: Option<f64>,
    pub text_unit_ids: Option<Vec<String>>,
    /// Combined degree of both endpoints.
    pub rank: Option<i64>,
    pub attributes: Option<Attributes>,
}
