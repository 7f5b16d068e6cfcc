//! Entity generators
//!
//! An entity type implements [`EntityGenerator`]: it names the param, message
//! and lookup tables it needs as retriever constants and supplies the per-row
//! construction. [`GeneratorData`] resolves everything for one game version and
//! produces the name-keyed output.
//!
//! ```no_run
//! use erdb::generators::{BolsteringMaterials, GeneratorData};
//! use erdb::loaders::FileSource;
//! use erdb::schema::SchemaStore;
//!
//! # fn main() -> erdb::Result<()> {
//! let source = FileSource::new("data/gamedata");
//! let schemas = SchemaStore::load_dir("data/schema")?;
//! for version in source.versions()? {
//!     let data = GeneratorData::<BolsteringMaterials>::construct(&source, &schemas, &version)?;
//!     erdb::generators::write_output(format!("out/{}/bolstering-materials.json", version), &data.generate()?, false)?;
//! }
//! # Ok(())
//! # }
//! ```

mod ashes_of_war;
mod bolstering_materials;
mod correction_graphs;
mod retrievers;
#[cfg(test)]
mod test_support;
mod tools;

pub use ashes_of_war::AshesOfWar;
pub use bolstering_materials::BolsteringMaterials;
pub use correction_graphs::CorrectionGraphs;
pub use retrievers::{LookupRetriever, MsgsRetriever, ParamDictRetriever, UserDataRetriever};
pub use tools::Tools;

use std::collections::HashMap;
use std::fs;
use std::marker::PhantomData;
use std::path::Path;

use indexmap::IndexMap;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::loaders::{DataSource, UserData};
use crate::params::{MsgDict, ParamDict, ParamRow};
use crate::schema::{Schema, SchemaStore};
use crate::shop::Lookup;
use crate::text::{remove_accents, split_lines, user_data_key};
use crate::{Error, GameVersion, Result};

/// Generated entities keyed by accent-stripped display name, in generation order
pub type Output = IndexMap<String, Value>;

/// Fields of one generated record
pub type Record = serde_json::Map<String, Value>;

/// Message table holding display names
pub const NAMES: &str = "names";
/// Message table holding one-line summaries
pub const SUMMARIES: &str = "summaries";
/// Message table holding multi-line descriptions
pub const DESCRIPTIONS: &str = "descriptions";

const NO_SUMMARY: &str = "no summary";
const NO_DESCRIPTION: &str = "no description";

/// `max_held` / `max_stored` when the table has no such field
const DEFAULT_MAX_COUNT: i64 = 999;

/// Description of one entity type
pub trait EntityGenerator: Sized {
    /// File name of the generated document
    const OUTPUT_FILE: &'static str;
    /// Schema file the generated document conforms to
    const SCHEMA_FILE: &'static str;
    /// Element name, also the user data directory name
    const ELEMENT_NAME: &'static str;

    /// Table whose rows become entities
    const MAIN_PARAM: ParamDictRetriever;
    /// Secondary param tables by name
    const PARAMS: &'static [(&'static str, ParamDictRetriever)] = &[];
    /// Message tables by name
    const MSGS: &'static [(&'static str, MsgsRetriever)] = &[];
    /// Shop lookups by name
    const LOOKUPS: &'static [(&'static str, LookupRetriever)] = &[];

    /// Record properties and their definitions
    fn schema(store: &SchemaStore) -> Result<Schema>;

    /// Display name of a row, before accent stripping
    fn get_key_name(data: &GeneratorData<Self>, row: &ParamRow) -> Result<String>;

    /// Rows of the main table that become entities, in output order
    fn main_param_iterator<'a>(
        _data: &GeneratorData<Self>,
        main_param: &'a ParamDict,
    ) -> Result<Vec<&'a ParamRow>> {
        Ok(main_param.values().collect())
    }

    /// Build the record of one row
    fn construct_object(data: &GeneratorData<Self>, row: &ParamRow) -> Result<Value>;
}

/// Which optional message fields [`GeneratorData::get_fields_item`] emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemFields {
    pub summary: bool,
    pub description: bool,
}

impl ItemFields {
    pub const ALL: ItemFields = ItemFields {
        summary: true,
        description: true,
    };
    pub const NONE: ItemFields = ItemFields {
        summary: false,
        description: false,
    };
}

impl Default for ItemFields {
    fn default() -> Self {
        Self::ALL
    }
}

/// All data one entity type needs for one game version
pub struct GeneratorData<G: EntityGenerator> {
    version: GameVersion,
    main_param: ParamDict,
    params: HashMap<&'static str, ParamDict>,
    msgs: HashMap<&'static str, MsgDict>,
    lookups: HashMap<&'static str, Lookup>,
    user_data: UserData,
    schema: Schema,
    _entity: PhantomData<G>,
}

impl<G: EntityGenerator> std::fmt::Debug for GeneratorData<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorData")
            .field("element", &G::ELEMENT_NAME)
            .field("version", &self.version)
            .field("main_param", &self.main_param.len())
            .field("params", &self.params.keys().collect::<Vec<_>>())
            .field("msgs", &self.msgs.keys().collect::<Vec<_>>())
            .field("lookups", &self.lookups.keys().collect::<Vec<_>>())
            .field("user_data", &self.user_data.len())
            .finish()
    }
}

impl<G: EntityGenerator> GeneratorData<G> {
    /// Resolve every retriever of `G` against `version`
    pub fn construct<S: DataSource + ?Sized>(
        source: &S,
        schemas: &SchemaStore,
        version: &GameVersion,
    ) -> Result<Self> {
        debug!("Constructing {} for {}", G::ELEMENT_NAME, version);

        let main_param = G::MAIN_PARAM.get(source, version)?;

        let params = G::PARAMS
            .iter()
            .map(|(name, r)| Ok((*name, r.get(source, version)?)))
            .collect::<Result<HashMap<_, _>>>()?;
        let msgs = G::MSGS
            .iter()
            .map(|(name, r)| Ok((*name, r.get(source, version)?)))
            .collect::<Result<HashMap<_, _>>>()?;
        let lookups = G::LOOKUPS
            .iter()
            .map(|(name, r)| Ok((*name, r.get(source, version)?)))
            .collect::<Result<HashMap<_, _>>>()?;

        let user_data = UserDataRetriever::new(G::ELEMENT_NAME).get(source, version)?;
        let schema = G::schema(schemas)?;

        Ok(Self {
            version: *version,
            main_param,
            params,
            msgs,
            lookups,
            user_data,
            schema,
            _entity: PhantomData,
        })
    }

    /// Build every entity, keyed by accent-stripped display name.
    ///
    /// When two rows map to the same key the later row wins and keeps the
    /// position of the first.
    pub fn generate(&self) -> Result<Output> {
        let mut output = Output::new();

        for row in G::main_param_iterator(self, &self.main_param)? {
            let key = remove_accents(&G::get_key_name(self, row)?);
            let record = G::construct_object(self, row)?;
            check_record(&self.schema, &record)?;

            if output.insert(key.clone(), record).is_some() {
                warn!("{}: row {} overwrites entry '{}'", G::ELEMENT_NAME, row.index, key);
            }
        }

        info!(
            "Generated {} {} entries for {}",
            output.len(),
            G::ELEMENT_NAME,
            self.version
        );
        Ok(output)
    }

    /// Fields common to every item record.
    ///
    /// Summary and description require the `summaries` / `descriptions`
    /// message tables when enabled; rows without an entry get placeholder text.
    pub fn get_fields_item(&self, row: &ParamRow, fields: ItemFields) -> Result<Record> {
        let mut record = Record::new();
        record.insert("full_hex_id".into(), json!(row.index_hex()));
        record.insert("id".into(), json!(row.index));
        record.insert("name".into(), json!(G::get_key_name(self, row)?));

        if fields.summary {
            let summaries = self
                .msgs(SUMMARIES)
                .map_err(|_| not_retrieved::<G>("summary", SUMMARIES))?;
            let summary = summaries.get(&row.index).map_or(NO_SUMMARY, String::as_str);
            record.insert("summary".into(), json!(summary));
        }

        if fields.description {
            let descriptions = self
                .msgs(DESCRIPTIONS)
                .map_err(|_| not_retrieved::<G>("description", DESCRIPTIONS))?;
            let description = descriptions
                .get(&row.index)
                .map_or_else(|| vec![NO_DESCRIPTION.to_string()], |d| split_lines(d));
            record.insert("description".into(), json!(description));
        }

        let is_tradable = row.get("disableMultiDropShare").map_or(false, |v| v == "0");
        record.insert("is_tradable".into(), json!(is_tradable));
        record.insert("price_sold".into(), json!(row.get_int_corrected("sellValue")?));
        record.insert("max_held".into(), json!(max_count(row, "maxNum")?));
        record.insert("max_stored".into(), json!(max_count(row, "maxRepositoryNum")?));

        Ok(record)
    }

    /// Hand-maintained fields of a row, falling back to each property's
    /// declared default
    pub fn get_fields_user_data(&self, row: &ParamRow, fields: &[&str]) -> Result<Record> {
        let name = user_data_key(&G::get_key_name(self, row)?);
        let entry = self.user_data.get(&name);

        fields
            .iter()
            .map(|field| {
                let default = self.schema.default_for(field)?;
                let value = entry
                    .and_then(|e| e.get(*field))
                    .cloned()
                    .unwrap_or(default);
                Ok((field.to_string(), value))
            })
            .collect()
    }

    pub fn version(&self) -> &GameVersion {
        &self.version
    }

    pub fn main_param(&self) -> &ParamDict {
        &self.main_param
    }

    pub fn param(&self, name: &str) -> Result<&ParamDict> {
        self.params
            .get(name)
            .ok_or_else(|| undeclared::<G>("param table", name))
    }

    pub fn msgs(&self, name: &str) -> Result<&MsgDict> {
        self.msgs
            .get(name)
            .ok_or_else(|| undeclared::<G>("message table", name))
    }

    pub fn lookup(&self, name: &str) -> Result<&Lookup> {
        self.lookups
            .get(name)
            .ok_or_else(|| undeclared::<G>("lookup", name))
    }

    pub fn user_data(&self) -> &UserData {
        &self.user_data
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

fn undeclared<G: EntityGenerator>(kind: &str, name: &str) -> Error {
    Error::Configuration(format!("{} does not retrieve {} '{}'", G::ELEMENT_NAME, kind, name))
}

fn not_retrieved<G: EntityGenerator>(field: &str, table: &str) -> Error {
    Error::Configuration(format!(
        "{}: {} requested, but no '{}' messages are retrieved",
        G::ELEMENT_NAME,
        field,
        table
    ))
}

fn max_count(row: &ParamRow, field: &str) -> Result<i64> {
    if row.has_field(field) {
        row.get_int(field)
    } else {
        Ok(DEFAULT_MAX_COUNT)
    }
}

/// Fail when an object record carries a field its schema does not declare
pub fn check_record(schema: &Schema, record: &Value) -> Result<()> {
    let Value::Object(fields) = record else {
        return Ok(());
    };

    match fields.keys().find(|k| !schema.is_declared(k)) {
        Some(field) => Err(Error::SchemaViolation(format!(
            "field '{}' is not declared by the schema",
            field
        ))),
        None => Ok(()),
    }
}

/// Merge records left to right
pub fn merge(records: impl IntoIterator<Item = Record>) -> Value {
    let mut merged = Record::new();
    for record in records {
        merged.extend(record);
    }
    Value::Object(merged)
}

/// Construct and generate `G` for one version
pub fn generate<G: EntityGenerator, S: DataSource + ?Sized>(
    source: &S,
    schemas: &SchemaStore,
    version: &GameVersion,
) -> Result<Output> {
    GeneratorData::<G>::construct(source, schemas, version)?.generate()
}

/// Write generated output as JSON, creating parent directories
pub fn write_output(path: impl AsRef<Path>, output: &Output, minimize: bool) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut json = if minimize {
        serde_json::to_string(output)?
    } else {
        serde_json::to_string_pretty(output)?
    };
    json.push('\n');

    fs::write(path, json)?;
    debug!("Wrote {} entries to {}", output.len(), path.display());
    Ok(())
}
