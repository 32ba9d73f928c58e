//! Knowledge-graph domain records produced by the loaders.
//!
//! These are plain value types: the loaders build them once per row and
//! callers treat them as immutable afterwards. Each carries an optional
//! `attributes` map holding raw, uncoerced extra columns.

pub mod community;
pub mod community_report;
pub mod covariate;
pub mod entity;
pub mod relationship;
pub mod text_unit;

pub use community::Community;
pub use community_report::CommunityReport;
pub use covariate::Covariate;
pub use entity::Entity;
pub use relationship::Relationship;
pub use text_unit::TextUnit;

use crate::table::Cell;
use std::collections::HashMap;

/// Raw extra columns copied verbatim from the source row.
pub type Attributes = HashMap<String, Cell>;
