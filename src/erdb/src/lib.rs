//! # erdb
//!
//! Extracts structured Elden Ring data (items, upgrade materials, shop offers,
//! ashes of war) from decoded param tables and message files, checks it against
//! the JSON schemas shipped with the data, and emits one name-keyed JSON document
//! per entity type.
//!
//! The library is built around a small generator framework:
//!
//! - [`generators::EntityGenerator`] describes an entity type: which param
//!   tables, message tables and shop lookups it needs, and how one record is
//!   built from one param row.
//! - [`generators::GeneratorData`] resolves those descriptors for a single
//!   [`GameVersion`] and turns the main param table into the final output.
//!
//! ## Example
//!
//! ```no_run
//! use erdb::generators::{AshesOfWar, GeneratorData};
//! use erdb::loaders::FileSource;
//! use erdb::schema::SchemaStore;
//!
//! # fn main() -> erdb::Result<()> {
//! let source = FileSource::new("data/gamedata");
//! let schemas = SchemaStore::load_dir("data/schema")?;
//! let version = "1.10.0".parse()?;
//!
//! let ashes = GeneratorData::<AshesOfWar>::construct(&source, &schemas, &version)?;
//! let output = ashes.generate()?;
//! println!("{} ashes of war", output.len());
//! # Ok(())
//! # }
//! ```

pub mod game_version;
pub mod generators;
pub mod loaders;
pub mod models;
pub mod params;
pub mod schema;
pub mod shop;
pub mod text;

#[doc(inline)]
pub use game_version::GameVersion;
#[doc(inline)]
pub use params::{IdRange, ItemIdFlag, MsgDict, ParamDict, ParamRow};
#[doc(inline)]
pub use shop::{Currency, Lineup, Lookup, Material, Product};

/// Errors raised while loading sources or generating entity data
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An entity type is wired up incorrectly (programmer error)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Data does not have the shape its schema or model demands
    #[error("Schema violation: {0}")]
    SchemaViolation(String),

    #[error("Missing {kind} table '{name}' for version {version}")]
    MissingTable {
        kind: &'static str,
        name: String,
        version: String,
    },

    #[error("Row {row} has no field '{field}'")]
    MissingField { row: u32, field: String },

    #[error("Row {row} field '{field}' has value '{value}', expected {expected}")]
    InvalidField {
        row: u32,
        field: String,
        value: String,
        expected: &'static str,
    },

    #[error("Unknown {kind} value: {value}")]
    UnknownEnumValue { kind: &'static str, value: i64 },

    #[error("Invalid game version: '{0}'")]
    InvalidVersion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
