use super::Attributes;
use serde::{Deserialize, Serialize};

/// The generated summary of a community.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityReport {
    pub id: String,
    pub short_id: Option<String>,
    pub title: String,
    pub community_id: String,
    pub summary: String,
    pub full_content: String,
    pub rank: Option<f64>,
    pub full_content_embedding: Option<Vec<f64>>,
    pub attributes: Option<Attributes>,
}
