//! Attribute scaling curves computed from `CalcCorrectGraph`

use serde_json::{json, Value};

use super::{EntityGenerator, GeneratorData, ParamDictRetriever};
use crate::models::CorrectionGraph;
use crate::params::{ItemIdFlag, ParamRow};
use crate::schema::{Properties, Schema, SchemaStore};
use crate::{Error, Result};

/// Every curve keyed by its `CalcCorrectGraph` row id
pub struct CorrectionGraphs;

impl EntityGenerator for CorrectionGraphs {
    const OUTPUT_FILE: &'static str = "correction-graph.json";
    const SCHEMA_FILE: &'static str = "correction-graph.schema.json";
    const ELEMENT_NAME: &'static str = "CorrectionGraph";

    const MAIN_PARAM: ParamDictRetriever =
        ParamDictRetriever::new("CalcCorrectGraph", ItemIdFlag::NonEquippable);

    // Records are plain arrays; the document only needs to exist.
    fn schema(store: &SchemaStore) -> Result<Schema> {
        let document = store.get(Self::SCHEMA_FILE).ok_or_else(|| {
            Error::Configuration(format!("schema document '{}' not found", Self::SCHEMA_FILE))
        })?;

        Ok(Schema {
            properties: Properties::new(),
            store: SchemaStore::from_documents([(Self::SCHEMA_FILE, document.clone())]),
        })
    }

    fn get_key_name(_data: &GeneratorData<Self>, row: &ParamRow) -> Result<String> {
        Ok(row.index.to_string())
    }

    fn construct_object(_data: &GeneratorData<Self>, row: &ParamRow) -> Result<Value> {
        let graph = CorrectionGraph::from_calc_correct(row)?;
        Ok(json!(graph.values()))
    }
}
