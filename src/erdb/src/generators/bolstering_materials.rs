//! Bolstering materials: flasks, smithing stones and gloveworts

use serde_json::{json, Value};

use super::{
    merge, EntityGenerator, GeneratorData, ItemFields, MsgsRetriever, ParamDictRetriever,
    DESCRIPTIONS, NAMES, SUMMARIES,
};
use crate::params::enums::{GoodsSortGroup, GoodsType};
use crate::params::{ItemIdFlag, ParamDict, ParamRow};
use crate::schema::{Schema, SchemaStore};
use crate::text::strip_invalid_name;
use crate::{Error, Result};

pub struct BolsteringMaterials;

fn category(row: &ParamRow) -> Result<&'static str> {
    Ok(match GoodsSortGroup::try_from(row.get_int("sortGroupId")?)? {
        GoodsSortGroup::Group1 => "Flask",
        GoodsSortGroup::Group2 => "Smithing Stone",
        GoodsSortGroup::Group3 => "Somber Smithing Stone",
        GoodsSortGroup::Group4 => "Glovewort",
    })
}

impl EntityGenerator for BolsteringMaterials {
    const OUTPUT_FILE: &'static str = "bolstering-materials.json";
    const SCHEMA_FILE: &'static str = "bolstering-materials.schema.json";
    const ELEMENT_NAME: &'static str = "BolsteringMaterials";

    const MAIN_PARAM: ParamDictRetriever = ParamDictRetriever::new("EquipParamGoods", ItemIdFlag::Goods);

    const MSGS: &'static [(&'static str, MsgsRetriever)] = &[
        (NAMES, MsgsRetriever::new("GoodsName")),
        (SUMMARIES, MsgsRetriever::new("GoodsInfo")),
        (DESCRIPTIONS, MsgsRetriever::new("GoodsCaption")),
    ];

    fn schema(store: &SchemaStore) -> Result<Schema> {
        let schema = store.load_properties(&[
            "item/properties",
            "item/definitions/ItemUserData/properties",
            "bolstering-materials/definitions/BolsteringMaterial/properties",
        ])?;
        Ok(schema.with_enums(store.load_enums(&["item-names"])?))
    }

    fn get_key_name(data: &GeneratorData<Self>, row: &ParamRow) -> Result<String> {
        let name = data.msgs(NAMES)?.get(&row.index).ok_or_else(|| {
            Error::SchemaViolation(format!("bolstering material {} has no name", row.index))
        })?;
        Ok(strip_invalid_name(name))
    }

    fn main_param_iterator<'a>(
        _data: &GeneratorData<Self>,
        main_param: &'a ParamDict,
    ) -> Result<Vec<&'a ParamRow>> {
        let wanted = GoodsType::ReinforcementMaterial as i64;
        let mut rows = Vec::new();
        for row in main_param.values() {
            if row.get_int("goodsType")? == wanted {
                rows.push(row);
            }
        }
        Ok(rows)
    }

    fn construct_object(data: &GeneratorData<Self>, row: &ParamRow) -> Result<Value> {
        let mut category_field = super::Record::new();
        category_field.insert("category".into(), json!(category(row)?));

        Ok(merge([
            data.get_fields_item(row, ItemFields::ALL)?,
            data.get_fields_user_data(row, &["locations", "remarks"])?,
            category_field,
        ]))
    }
}
