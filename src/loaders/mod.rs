//! Row-wise loaders: one `load_*` function per domain record.
//!
//! Every loader follows the same contract:
//! - required bindings are checked against the table schema first, so a
//!   missing required column fails before any row is read (even on an empty
//!   table);
//! - rows are converted in positional order and the output has exactly one
//!   record per row;
//! - the first coercion failure aborts the call, no rows are skipped;
//! - the table is only borrowed, so repeated calls return equal results.
//!
//! Column bindings live in the matching `*Columns` struct. `Default` gives the
//! conventional index schema names; an optional binding set to `None` means
//! "no column" and triggers the field's fallback.

mod communities;
mod community_reports;
mod covariates;
mod entities;
mod relationships;
mod text_units;

pub use communities::{CommunityColumns, load_communities};
pub use community_reports::{CommunityReportColumns, load_community_reports};
pub use covariates::{CovariateColumns, DEFAULT_COVARIATE_TYPE, load_covariates};
pub use entities::{EntityColumns, load_entities};
pub use relationships::{RelationshipColumns, load_relationships};
pub use text_units::{TextUnitColumns, load_text_units};

use crate::error::LoadResult;
use crate::table::{Row, Table};

/// Convert every row with `f`, keeping row order and stopping at the first
/// error.
fn load_rows<T>(
    kind: &'static str,
    table: &Table,
    f: impl Fn(&Row<'_>) -> LoadResult<T>,
) -> LoadResult<Vec<T>> {
    tracing::debug!(kind, rows = table.len(), "loading records");
    let out = table.rows().map(|row| f(&row)).collect::<LoadResult<Vec<T>>>();
    match &out {
        Ok(v) => tracing::debug!(kind, loaded = v.len(), "records loaded"),
        Err(e) => tracing::debug!(kind, error = %e, "load aborted"),
    }
    out
}

pub(crate) fn col(s: &str) -> Option<String> {
    Some(s.to_string())
}
