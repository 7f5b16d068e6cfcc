//! Ashes of War (`EquipParamGem`)

use serde_json::{json, Value};

use super::{
    merge, EntityGenerator, GeneratorData, ItemFields, MsgsRetriever, ParamDictRetriever,
    DESCRIPTIONS, NAMES, SUMMARIES,
};
use crate::params::enums::{affinity_by_id, AFFINITIES, WEAPON_CLASSES};
use crate::params::{ItemIdFlag, ParamRow};
use crate::schema::{Schema, SchemaStore};
use crate::Result;

/// Gem rows below this id are unused placeholders
const FIRST_ASH_OF_WAR: u32 = 10000;

pub struct AshesOfWar;

impl EntityGenerator for AshesOfWar {
    const OUTPUT_FILE: &'static str = "ashes-of-war.json";
    const SCHEMA_FILE: &'static str = "ashes-of-war.schema.json";
    const ELEMENT_NAME: &'static str = "AshesOfWar";

    const MAIN_PARAM: ParamDictRetriever =
        ParamDictRetriever::new("EquipParamGem", ItemIdFlag::Gems).with_range(Some(FIRST_ASH_OF_WAR), None);

    const MSGS: &'static [(&'static str, MsgsRetriever)] = &[
        (NAMES, MsgsRetriever::new("GemName")),
        (SUMMARIES, MsgsRetriever::new("GemInfo")),
        (DESCRIPTIONS, MsgsRetriever::new("GemCaption")),
    ];

    fn schema(store: &SchemaStore) -> Result<Schema> {
        let schema = store.load_properties(&[
            "item/properties",
            "item/definitions/ItemUserData/properties",
            "ashes-of-war/definitions/AshOfWar/properties",
        ])?;
        let enums = store.load_enums(&[
            "ash-of-war-names",
            "affinity-names",
            "armament-class-names",
            "skill-names",
        ])?;
        Ok(schema.with_enums(enums))
    }

    /// The gem row name; rows without one fall back to the `GemName` message
    fn get_key_name(data: &GeneratorData<Self>, row: &ParamRow) -> Result<String> {
        if !row.name.is_empty() {
            return Ok(row.name.clone());
        }
        Ok(data.msgs(NAMES)?.get(&row.index).cloned().unwrap_or_default())
    }

    fn construct_object(data: &GeneratorData<Self>, row: &ParamRow) -> Result<Value> {
        let default_affinity = affinity_by_id(row.get_int("defaultWepAttr")?)?;

        let specific = json!({
            "classes": mountable_classes(row)?,
            "default_affinity": default_affinity.name,
            "affinities": configurable_affinities(row)?,
            "skill_id": row.get_int("swordArtsParamId")?,
        });

        Ok(merge([
            data.get_fields_item(row, ItemFields::ALL)?,
            data.get_fields_user_data(row, &["locations", "remarks"])?,
            specific.as_object().cloned().unwrap_or_default(),
        ]))
    }
}

/// A flag field that is absent reads as unset
fn flag_set(row: &ParamRow, field: &str) -> Result<bool> {
    if row.has_field(field) {
        row.get_bool(field)
    } else {
        Ok(false)
    }
}

fn mountable_classes(row: &ParamRow) -> Result<Vec<&'static str>> {
    let mut classes = Vec::new();
    for class in WEAPON_CLASSES {
        if flag_set(row, &class.mount_field())? {
            classes.push(class.name);
        }
    }
    Ok(classes)
}

fn configurable_affinities(row: &ParamRow) -> Result<Vec<&'static str>> {
    let mut affinities = Vec::new();
    for affinity in AFFINITIES {
        if flag_set(row, &affinity.configurable_field())? {
            affinities.push(affinity.name);
        }
    }
    Ok(affinities)
}
