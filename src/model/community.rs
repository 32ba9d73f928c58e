use super::Attributes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A cluster of entities at one level of the community hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub id: String,
    pub short_id: Option<String>,
    pub title: String,
    pub level: String,
    pub parent: String,
    pub children: Vec<String>,
    pub entity_ids: Option<Vec<String>>,
    pub relationship_ids: Option<Vec<String>>,
    pub covariate_ids: Option<HashMap<String, String>>,
    pub attributes: Option<Attributes>,
}
