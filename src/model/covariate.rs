use super::Attributes;
use serde::{Deserialize, Serialize};

/// Extra information attached to a subject entity, typically a claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Covariate {
    pub id: String,
    pub short_id: Option<String>,
    pub subject_id: String,
    /// Defaults to `"claim"`.
    pub covariate_type: String,
    pub text_unit_ids: Option<Vec<String>>,
    pub attributes: Option<Attributes>,
}
