use anyhow::Result;
use graphtable::testing::covariate_table;
use graphtable::*;
use std::fs;

#[test]
fn yaml_file_overrides_bindings() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let file = tmp.path().join("loader.yaml");
    fs::write(
        &file,
        "covariates:\n  type: ~\n  attributes: [status]\ntext_units:\n  attributes: []\n",
    )?;
    let cfg = LoaderConfig::from_file(&file)?;
    assert_eq!(cfg.entities, EntityColumns::default());
    assert!(cfg.text_units.attributes.is_empty());

    let covs = load_covariates(&covariate_table(), &cfg.covariates)?;
    assert!(covs.iter().all(|c| c.covariate_type == "claim"));
    assert!(covs.iter().all(|c| c.attributes.is_some()));
    Ok(())
}

#[test]
fn json_file_is_accepted() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let file = tmp.path().join("loader.json");
    fs::write(&file, r#"{"communities": {"short_id": null, "level": "depth"}}"#)?;
    let cfg = LoaderConfig::from_file(&file)?;
    assert_eq!(cfg.communities.short_id, None);
    assert_eq!(cfg.communities.level, "depth");
    assert_eq!(cfg.communities.title, "title");
    Ok(())
}

#[test]
fn config_round_trips_through_json() -> Result<()> {
    let cfg = LoaderConfig::default();
    let text = serde_json::to_string(&cfg)?;
    assert_eq!(LoaderConfig::from_json_str(&text)?, cfg);
    Ok(())
}

#[test]
fn unknown_extension_is_rejected() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let file = tmp.path().join("loader.toml");
    fs::write(&file, "")?;
    let err = LoaderConfig::from_file(&file).unwrap_err();
    assert!(err.to_string().contains("unsupported config format"));
    Ok(())
}
