//! Loader configuration: all column bindings in one serde document.
//!
//! Every section and every field is optional; anything left out keeps the
//! default binding. A YAML override might look like:
//!
//! ```yaml
//! entities:
//!   rank: node_degree
//!   attributes: [frequency]
//! covariates:
//!   type: ~            # no column, every covariate becomes a "claim"
//! ```

use crate::loaders::{
    CommunityColumns, CommunityReportColumns, CovariateColumns, EntityColumns,
    RelationshipColumns, TextUnitColumns,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Column bindings for every record kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub entities: EntityColumns,
    pub relationships: RelationshipColumns,
    pub covariates: CovariateColumns,
    pub communities: CommunityColumns,
    pub community_reports: CommunityReportColumns,
    pub text_units: TextUnitColumns,
}

impl LoaderConfig {
    /// Parse a YAML document.
    ///
    /// # Errors
    /// Returns an error if the document is not valid YAML or a binding has
    /// the wrong shape.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).context("parse loader config YAML")
    }

    /// Parse a JSON document.
    ///
    /// # Errors
    /// Returns an error if the document is not valid JSON or a binding has
    /// the wrong shape.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("parse loader config JSON")
    }

    /// Read a config file, choosing the format from its extension
    /// (`.yaml`, `.yml` or `.json`).
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, has an unknown extension,
    /// or fails to parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let cfg = match ext.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml_str(&contents),
            Some("json") => Self::from_json_str(&contents),
            _ => bail!("unsupported config format: {}", path.display()),
        }
        .with_context(|| format!("load {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded loader config");
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(LoaderConfig::from_json_str("{}").unwrap(), LoaderConfig::default());
    }

    #[test]
    fn yaml_overrides_keep_other_defaults() {
        let cfg = LoaderConfig::from_yaml_str(
            "entities:\n  rank: node_degree\n  attributes: [frequency]\ncovariates:\n  type: ~\n",
        )
        .unwrap();
        assert_eq!(cfg.entities.rank.as_deref(), Some("node_degree"));
        assert_eq!(cfg.entities.attributes, vec!["frequency".to_string()]);
        assert_eq!(cfg.entities.title, "title");
        assert_eq!(cfg.covariates.covariate_type, None);
        assert_eq!(cfg.text_units, TextUnitColumns::default());
    }

    #[test]
    fn wrong_shape_is_rejected() {
        assert!(LoaderConfig::from_json_str(r#"{"entities": {"id": 3}}"#).is_err());
    }
}
