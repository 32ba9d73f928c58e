use super::Attributes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A chunk of source text and the graph elements extracted from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextUnit {
    pub id: String,
    /// Always the row position.
    pub short_id: Option<String>,
    pub text: String,
    pub entity_ids: Option<Vec<String>>,
    pub relationship_ids: Option<Vec<String>>,
    pub covariate_ids: Option<HashMap<String, String>>,
    pub n_tokens: Option<i64>,
    pub document_ids: Option<Vec<String>>,
    pub attributes: Option<Attributes>,
}
