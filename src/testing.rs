//! Fixture tables for tests and examples.
//!
//! Each function returns a small table shaped like the corresponding index
//! output, using the default column names, so it loads with
//! `Default::default()` bindings.
//!
//! ```
//! use graphtable::testing::entity_table;
//! use graphtable::{EntityColumns, load_entities};
//!
//! let entities = load_entities(&entity_table(), &EntityColumns::default()).unwrap();
//! assert_eq!(entities.len(), 3);
//! ```

use crate::table::{Cell, Table};
use serde_json::{Value, json};

fn table<const N: usize>(columns: [&str; N], rows: Vec<[Cell; N]>) -> Table {
    let mut t = Table::new(columns);
    for row in rows {
        // widths are fixed by the const generic
        let _ = t.push_row(row.into());
    }
    t
}

/// Three entities with embeddings, communities and degrees.
#[must_use]
pub fn entity_table() -> Table {
    table(
        [
            "id",
            "human_readable_id",
            "title",
            "type",
            "description",
            "description_embedding",
            "community_ids",
            "text_unit_ids",
            "degree",
        ],
        vec![
            [
                json!("e-ada"),
                json!(0),
                json!("ADA LOVELACE"),
                json!("PERSON"),
                json!("Mathematician and writer"),
                json!([0.1, 0.2, 0.3]),
                json!(["c-0"]),
                json!(["t-0", "t-1"]),
                json!(2),
            ],
            [
                json!("e-babbage"),
                json!(1),
                json!("CHARLES BABBAGE"),
                json!("PERSON"),
                json!("Designer of the Analytical Engine"),
                json!([0.3, 0.2, 0.1]),
                json!(["c-0"]),
                json!(["t-0"]),
                json!(1),
            ],
            [
                json!("e-engine"),
                json!(2),
                json!("ANALYTICAL ENGINE"),
                json!("MACHINE"),
                Value::Null,
                Value::Null,
                json!(["c-0", "c-1"]),
                json!("t-1"),
                json!(1.0),
            ],
        ],
    )
}

/// Two relationships between the fixture entities.
#[must_use]
pub fn relationship_table() -> Table {
    table(
        [
            "id",
            "human_readable_id",
            "source",
            "target",
            "description",
            "weight",
            "combined_degree",
            "text_unit_ids",
        ],
        vec![
            [
                json!("r-0"),
                json!(0),
                json!("ADA LOVELACE"),
                json!("CHARLES BABBAGE"),
                json!("Corresponded about the engine"),
                json!(8.0),
                json!(3),
                json!(["t-0"]),
            ],
            [
                json!("r-1"),
                json!(1),
                json!("ADA LOVELACE"),
                json!("ANALYTICAL ENGINE"),
                json!("Wrote the first program for it"),
                json!(10),
                json!(3),
                json!(["t-1"]),
            ],
        ],
    )
}

/// Two claims, one with an explicit type and one with a null type.
#[must_use]
pub fn covariate_table() -> Table {
    table(
        [
            "id",
            "human_readable_id",
            "subject_id",
            "type",
            "text_unit_ids",
            "status",
        ],
        vec![
            [
                json!("cv-0"),
                json!(0),
                json!("ADA LOVELACE"),
                json!("authorship"),
                json!(["t-1"]),
                json!("TRUE"),
            ],
            [
                json!("cv-1"),
                json!(1),
                json!("CHARLES BABBAGE"),
                Value::Null,
                json!(["t-0"]),
                json!("SUSPECTED"),
            ],
        ],
    )
}

/// A root community with one child.
#[must_use]
pub fn community_table() -> Table {
    table(
        [
            "id",
            "community",
            "title",
            "level",
            "parent",
            "children",
            "entity_ids",
            "relationship_ids",
            "size",
        ],
        vec![
            [
                json!("c-0"),
                json!(0),
                json!("Community 0"),
                json!(0),
                json!(-1),
                json!([1]),
                json!(["e-ada", "e-babbage", "e-engine"]),
                json!(["r-0", "r-1"]),
                json!(3),
            ],
            [
                json!("c-1"),
                json!(1),
                json!("Community 1"),
                json!(1),
                json!(0),
                json!([]),
                json!(["e-engine"]),
                Value::Null,
                json!(1),
            ],
        ],
    )
}

/// Reports for both fixture communities.
#[must_use]
pub fn community_report_table() -> Table {
    table(
        [
            "id",
            "community",
            "title",
            "summary",
            "full_content",
            "rank",
            "full_content_embedding",
        ],
        vec![
            [
                json!("cr-0"),
                json!(0),
                json!("Early computing"),
                json!("Lovelace and Babbage"),
                json!("# Early computing\n\nLovelace and Babbage worked on the engine."),
                json!(8.5),
                json!([0.5, 0.5]),
            ],
            [
                json!("cr-1"),
                json!(1),
                json!("The engine"),
                json!("A mechanical computer"),
                json!("# The engine\n\nA proposed mechanical general-purpose computer."),
                json!("6"),
                Value::Null,
            ],
        ],
    )
}

/// Two text units with metadata.
#[must_use]
pub fn text_unit_table() -> Table {
    table(
        [
            "id",
            "text",
            "n_tokens",
            "document_ids",
            "entity_ids",
            "relationship_ids",
            "covariate_ids",
            "metadata",
        ],
        vec![
            [
                json!("t-0"),
                json!("Babbage designed the Analytical Engine."),
                json!(7),
                json!(["d-0"]),
                json!(["e-ada", "e-babbage"]),
                json!(["r-0"]),
                json!({"claim": "cv-1"}),
                json!({"source": "notes.txt"}),
            ],
            [
                json!("t-1"),
                json!("Lovelace wrote the first program."),
                json!(6),
                json!(["d-0"]),
                json!(["e-ada", "e-engine"]),
                json!(["r-1"]),
                Value::Null,
                Value::Null,
            ],
        ],
    )
}
