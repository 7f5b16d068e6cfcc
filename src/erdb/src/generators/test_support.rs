//! Shared fixtures for generator tests

use serde_json::{json, Value};

use crate::params::{ItemIdFlag, ParamRow};
use crate::schema::SchemaStore;
use crate::GameVersion;

pub const V: GameVersion = GameVersion::new(1, 10, 0);

fn item_document() -> Value {
    json!({
        "properties": {
            "full_hex_id": {"type": "string"},
            "id": {"type": "integer"},
            "name": {"type": "string"},
            "summary": {"type": "string"},
            "description": {"type": "array"},
            "is_tradable": {"type": "boolean"},
            "price_sold": {"type": "integer"},
            "max_held": {"type": "integer"},
            "max_stored": {"type": "integer"}
        },
        "definitions": {
            "ItemUserData": {"properties": {
                "locations": {"type": "array", "default": []},
                "remarks": {"type": "array", "default": []}
            }}
        }
    })
}

fn enum_document() -> Value {
    json!({"enum": []})
}

/// Schema store with the item document, one entity document and empty enums
pub fn schemas(entity_doc: &str, definition: &str, properties: Value) -> SchemaStore {
    let mut store = SchemaStore::from_documents([("item.schema.json", item_document())]);
    store.insert(
        format!("{}.schema.json", entity_doc),
        json!({"definitions": {definition: {"properties": properties}}}),
    );
    for name in [
        "item-names",
        "ash-of-war-names",
        "affinity-names",
        "armament-class-names",
        "skill-names",
    ] {
        store.insert(format!("enums/{}.schema.json", name), enum_document());
    }
    store
}

/// Goods row carrying the fields every item record reads
pub fn item_row(id: u32) -> ParamRow {
    ParamRow::new(id, "", ItemIdFlag::NonEquippable)
        .with_field("sellValue", 100)
        .with_field("disableMultiDropShare", 0)
        .with_field("maxNum", 99)
        .with_field("maxRepositoryNum", 600)
}
