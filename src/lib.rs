//! # Graphtable
//!
//! Load knowledge-graph index tables into typed records.
//!
//! A graph indexing pipeline leaves its results as tables: entities,
//! relationships, covariates (claims), communities, community reports and
//! text units. Graphtable turns each of those tables into a `Vec` of plain
//! Rust structs, one per row, ready for retrieval and ranking code.
//!
//! ## Quick Start
//!
//! ```ignore
//! use graphtable::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let table = read_table("output/entities.parquet")?;
//! let entities = load_entities(&table, &EntityColumns::default())?;
//! println!("{} entities, first is {}", entities.len(), entities[0].title);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Table
//!
//! A [`Table`] is a rectangular grid of JSON-like cells with named columns
//! and positionally indexed rows. Build one in memory or read one from
//! JSONL, CSV or Parquet with the [`io`] readers.
//!
//! ### Column bindings
//!
//! Each loader takes a `*Columns` struct naming the source column for every
//! field. `Default` matches the conventional index schema; optional fields
//! can be set to `None` to mean "no column". [`LoaderConfig`] groups all six
//! binding sets and reads them from YAML or JSON.
//!
//! ### Coercion
//!
//! Cells are converted per field (string, int, float, list, mapping) by the
//! helpers in [`coerce`]. Missing optional data becomes `None`; `short_id`
//! falls back to the row position. A scalar in a list column is wrapped into
//! a one-element list.
//!
//! ### Errors
//!
//! Loaders return [`LoadError`]: `MissingColumn` when a required column is
//! not in the table (checked before any row is read) and `Coercion` when a
//! cell does not fit its field. The first error aborts the load.
//!
//! ## Feature Flags
//!
//! - `io-jsonl` - JSON Lines reader
//! - `io-csv` - CSV reader
//! - `io-parquet` - Parquet reader (requires Arrow)
//! - `compression-gzip`, `compression-zstd` - transparent decompression for
//!   the text readers
//!
//! ## Module Overview
//!
//! - [`table`] - the in-memory table and row views
//! - [`coerce`] - per-field coercion helpers
//! - [`loaders`] - the six `load_*` functions and their column bindings
//! - [`model`] - the domain records
//! - [`config`] - loader configuration files
//! - [`io`] - table readers
//! - [`testing`] - fixture tables

pub mod coerce;
pub mod config;
pub mod error;
pub mod io;
pub mod loaders;
pub mod model;
pub mod table;
pub mod testing;

pub use config::LoaderConfig;
pub use error::{LoadError, LoadResult};
pub use io::{read_table, read_table_glob};
pub use loaders::{
    CommunityColumns, CommunityReportColumns, CovariateColumns, DEFAULT_COVARIATE_TYPE,
    EntityColumns, RelationshipColumns, TextUnitColumns, load_communities, load_community_reports,
    load_covariates, load_entities, load_relationships, load_text_units,
};
pub use model::{Attributes, Community, CommunityReport, Covariate, Entity, Relationship, TextUnit};
pub use table::{Cell, Row, Table};

// Gated re-exports
#[cfg(feature = "io-jsonl")]
pub use io::jsonl::read_jsonl_table;

#[cfg(feature = "io-csv")]
pub use io::csv::read_csv_table;

#[cfg(feature = "io-parquet")]
pub use io::parquet::read_parquet_table;
