//! JSON schema documents describing the generated records
//!
//! Schemas live in a directory of `*.schema.json` files. Entity types pick the
//! object properties they emit out of these documents with
//! `<document>/<json pointer>` paths, e.g.
//! `ashes-of-war/definitions/AshOfWar/properties`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;
use walkdir::WalkDir;

use crate::{Error, Result};

const SCHEMA_SUFFIX: &str = ".schema.json";

/// Declared record properties: property name → property schema
pub type Properties = serde_json::Map<String, Value>;

/// Schema documents keyed by path relative to the schema root, e.g.
/// `item.schema.json` or `enums/affinity-names.schema.json`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaStore {
    documents: BTreeMap<String, Value>,
}

impl SchemaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.schema.json` below `root`
    pub fn load_dir(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let mut store = Self::new();

        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry.map_err(|e| Error::Configuration(format!("schema directory: {}", e)))?;
            let path = entry.path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !entry.file_type().is_file() || !file_name.ends_with(SCHEMA_SUFFIX) {
                continue;
            }

            let relative = path.strip_prefix(root).unwrap_or(path);
            let key = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            let document: Value = serde_json::from_str(&fs::read_to_string(path)?)?;
            store.documents.insert(key, document);
        }

        debug!("Loaded {} schema documents from {}", store.len(), root.display());
        Ok(store)
    }

    pub fn from_documents<S: Into<String>>(documents: impl IntoIterator<Item = (S, Value)>) -> Self {
        Self {
            documents: documents.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, document: Value) {
        self.documents.insert(name.into(), document);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.documents.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn extend(&mut self, other: SchemaStore) {
        self.documents.extend(other.documents);
    }

    /// Merge the property objects found at `paths`, later paths overriding
    /// earlier ones. Every document touched is kept as a definition.
    pub fn load_properties(&self, paths: &[&str]) -> Result<Schema> {
        let mut properties = Properties::new();
        let mut store = SchemaStore::new();

        for path in paths {
            let (doc_name, pointer) = self.split_path(path)?;
            let document = &self.documents[&doc_name];

            let object = document
                .pointer(&pointer)
                .and_then(Value::as_object)
                .ok_or_else(|| {
                    Error::Configuration(format!("schema path '{}' is not an object", path))
                })?;

            for (name, property) in object {
                properties.insert(name.clone(), property.clone());
            }
            store.insert(doc_name, document.clone());
        }

        Ok(Schema { properties, store })
    }

    /// Definitions of the named enums (`enums/<name>.schema.json`)
    pub fn load_enums(&self, names: &[&str]) -> Result<SchemaStore> {
        let mut store = SchemaStore::new();
        for name in names {
            let key = format!("enums/{}{}", name, SCHEMA_SUFFIX);
            let document = self
                .get(&key)
                .ok_or_else(|| Error::Configuration(format!("unknown schema enum '{}'", name)))?;
            store.insert(key, document.clone());
        }
        Ok(store)
    }

    /// Split `<doc>/<pointer>` at the longest prefix naming a known document
    fn split_path(&self, path: &str) -> Result<(String, String)> {
        let split_points = path
            .match_indices('/')
            .map(|(i, _)| i)
            .chain(std::iter::once(path.len()));

        let mut found = None;
        for i in split_points {
            let doc_name = format!("{}{}", &path[..i], SCHEMA_SUFFIX);
            if self.documents.contains_key(&doc_name) {
                found = Some((doc_name, path[i..].to_string()));
            }
        }

        found.ok_or_else(|| Error::Configuration(format!("no schema document for '{}'", path)))
    }
}

/// Properties an entity record may carry, and the documents defining them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub properties: Properties,
    pub store: SchemaStore,
}

impl Schema {
    pub fn with_enums(mut self, enums: SchemaStore) -> Self {
        self.store.extend(enums);
        self
    }

    pub fn is_declared(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    /// Declared default of a property, `{}` when it declares none
    pub fn default_for(&self, property: &str) -> Result<Value> {
        let declared = self.properties.get(property).ok_or_else(|| {
            Error::SchemaViolation(format!("property '{}' is not declared by the schema", property))
        })?;

        Ok(declared
            .get("default")
            .cloned()
            .unwrap_or_else(|| Value::Object(serde_json::Map::new())))
    }
}
