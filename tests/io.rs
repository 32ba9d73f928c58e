use anyhow::Result;
use graphtable::*;
use serde_json::{Value, json};
use std::fs;

#[cfg(feature = "io-jsonl")]
#[test]
fn jsonl_table_loads_entities() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let file = tmp.path().join("entities.jsonl");
    fs::write(
        &file,
        r#"{"id":"e1","title":"Alpha","degree":3,"description_embedding":[0.5,1.5]}

{"id":"e2","title":"Beta","type":"ORG"}
"#,
    )?;

    let table = read_jsonl_table(&file)?;
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.columns(),
        &["id", "title", "degree", "description_embedding", "type"]
    );

    let entities = load_entities(&table, &EntityColumns::default())?;
    assert_eq!(entities[0].rank, Some(3));
    assert_eq!(entities[0].description_embedding, Some(vec![0.5, 1.5]));
    assert_eq!(entities[0].entity_type, None);
    assert_eq!(entities[1].entity_type.as_deref(), Some("ORG"));
    assert_eq!(entities[1].short_id.as_deref(), Some("1"));
    Ok(())
}

#[cfg(feature = "io-jsonl")]
#[test]
fn jsonl_rejects_non_objects() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let file = tmp.path().join("bad.jsonl");
    fs::write(&file, "{\"id\":\"a\"}\n[1,2]\n")?;
    let err = read_jsonl_table(&file).unwrap_err();
    assert!(err.to_string().contains("line 2"));
    Ok(())
}

#[cfg(all(feature = "io-jsonl", feature = "compression-gzip"))]
#[test]
fn gzip_jsonl_is_decompressed() -> Result<()> {
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    let tmp = tempfile::tempdir()?;
    let file = tmp.path().join("text_units.jsonl.gz");
    let mut enc = GzEncoder::new(fs::File::create(&file)?, Compression::default());
    enc.write_all(b"{\"id\":\"t0\",\"text\":\"hello\",\"n_tokens\":1}\n")?;
    enc.finish()?;

    let table = read_table(&file)?;
    let units = load_text_units(&table, &TextUnitColumns::default())?;
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].text, "hello");
    assert_eq!(units[0].n_tokens, Some(1));
    Ok(())
}

#[cfg(feature = "io-csv")]
#[test]
fn csv_table_loads_relationships() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let file = tmp.path().join("relationships.csv");
    fs::write(
        &file,
        "id,source,target,weight,combined_degree,text_unit_ids,description\n\
         r0,A,B,2.5,4,\"[\"\"t0\"\",\"\"t1\"\"]\",\n\
         r1,B,C,,,t2,knows\n",
    )?;

    let table = read_csv_table(&file)?;
    assert_eq!(table.row(1).unwrap().get("weight"), Some(&Value::Null));

    let rels = load_relationships(&table, &RelationshipColumns::default())?;
    assert_eq!(rels[0].weight, Some(2.5));
    assert_eq!(rels[0].rank, Some(4));
    assert_eq!(
        rels[0].text_unit_ids,
        Some(vec!["t0".to_string(), "t1".to_string()])
    );
    assert_eq!(rels[0].description, None);
    assert_eq!(rels[1].weight, None);
    assert_eq!(rels[1].text_unit_ids, Some(vec!["t2".to_string()]));
    assert_eq!(rels[1].description.as_deref(), Some("knows"));
    Ok(())
}

#[cfg(feature = "io-parquet")]
#[test]
fn parquet_table_loads_reports() -> Result<()> {
    use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::arrow_writer::ArrowWriter;
    use std::sync::Arc;

    let tmp = tempfile::tempdir()?;
    let file = tmp.path().join("community_reports.parquet");

    let batch = RecordBatch::try_from_iter(vec![
        ("id", Arc::new(StringArray::from(vec!["cr0", "cr1"])) as ArrayRef),
        ("community", Arc::new(Int64Array::from(vec![0, 1])) as ArrayRef),
        ("title", Arc::new(StringArray::from(vec!["T0", "T1"])) as ArrayRef),
        ("summary", Arc::new(StringArray::from(vec!["s0", "s1"])) as ArrayRef),
        ("full_content", Arc::new(StringArray::from(vec!["c0", "c1"])) as ArrayRef),
        (
            "rank",
            Arc::new(Float64Array::from(vec![Some(7.5), None])) as ArrayRef,
        ),
        (
            "full_content_embedding",
            Arc::new(StringArray::from(vec![None::<&str>, None])) as ArrayRef,
        ),
    ])?;
    let mut writer = ArrowWriter::try_new(fs::File::create(&file)?, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;

    let table = read_parquet_table(&file)?;
    // all-null column is kept from the schema
    assert!(table.has_column("full_content_embedding"));

    let reports = load_community_reports(&table, &CommunityReportColumns::default())?;
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].community_id, "0");
    assert_eq!(reports[1].short_id.as_deref(), Some("1"));
    assert_eq!(reports[0].rank, Some(7.5));
    assert_eq!(reports[1].rank, None);
    assert_eq!(reports[0].full_content_embedding, None);
    Ok(())
}

#[cfg(all(feature = "io-jsonl", feature = "io-csv"))]
#[test]
fn glob_concatenates_in_path_order() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    fs::write(tmp.path().join("part-1.jsonl"), "{\"id\":\"b\",\"title\":\"B\"}\n")?;
    fs::write(tmp.path().join("part-0.csv"), "id,title,extra\na,A,x\n")?;

    let pattern = format!("{}/part-*", tmp.path().display());
    let table = read_table_glob(&pattern)?;
    assert_eq!(table.columns(), &["id", "title", "extra"]);

    let entities = load_entities(&table, &EntityColumns::default())?;
    let ids: Vec<&str> = entities.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
    assert_eq!(entities[1].short_id.as_deref(), Some("1"));
    assert_eq!(table.row(1).unwrap().get("extra"), Some(&json!(null)));
    Ok(())
}

#[test]
fn unknown_format_and_empty_glob_fail() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let file = tmp.path().join("data.txt");
    fs::write(&file, "x")?;
    assert!(read_table(&file).is_err());
    assert!(read_table_glob(&format!("{}/*.jsonl", tmp.path().display())).is_err());
    Ok(())
}
