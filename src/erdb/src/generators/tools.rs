//! Tools: regular goods, with crafting recipes resolved through the shop lookup

use serde_json::{json, Value};

use super::{
    merge, EntityGenerator, GeneratorData, ItemFields, LookupRetriever, MsgsRetriever,
    ParamDictRetriever, Record, DESCRIPTIONS, NAMES, SUMMARIES,
};
use crate::params::enums::GoodsType;
use crate::params::{ItemIdFlag, ParamDict, ParamRow};
use crate::schema::{Schema, SchemaStore};
use crate::shop::{Lineup, Product, ProductCategory};
use crate::text::strip_invalid_name;
use crate::Result;

const RECIPES: &str = "recipes";

pub struct Tools;

impl EntityGenerator for Tools {
    const OUTPUT_FILE: &'static str = "tools.json";
    const SCHEMA_FILE: &'static str = "tools.schema.json";
    const ELEMENT_NAME: &'static str = "Tools";

    const MAIN_PARAM: ParamDictRetriever = ParamDictRetriever::new("EquipParamGoods", ItemIdFlag::Goods);

    const MSGS: &'static [(&'static str, MsgsRetriever)] = &[
        (NAMES, MsgsRetriever::new("GoodsName")),
        (SUMMARIES, MsgsRetriever::new("GoodsInfo")),
        (DESCRIPTIONS, MsgsRetriever::new("GoodsCaption")),
    ];

    const LOOKUPS: &'static [(&'static str, LookupRetriever)] =
        &[(RECIPES, LookupRetriever::new(None, None, None, None).recipe())];

    fn schema(store: &SchemaStore) -> Result<Schema> {
        let schema = store.load_properties(&[
            "item/properties",
            "item/definitions/ItemUserData/properties",
            "tools/definitions/Tool/properties",
        ])?;
        Ok(schema.with_enums(store.load_enums(&["item-names"])?))
    }

    fn get_key_name(data: &GeneratorData<Self>, row: &ParamRow) -> Result<String> {
        Ok(data
            .msgs(NAMES)?
            .get(&row.index)
            .map(|name| strip_invalid_name(name))
            .unwrap_or_default())
    }

    /// Normal items that have a display name
    fn main_param_iterator<'a>(
        data: &GeneratorData<Self>,
        main_param: &'a ParamDict,
    ) -> Result<Vec<&'a ParamRow>> {
        let names = data.msgs(NAMES)?;
        let wanted = GoodsType::NormalItem as i64;

        let mut rows = Vec::new();
        for row in main_param.values() {
            let named = names.get(&row.index).is_some_and(|n| !strip_invalid_name(n).is_empty());
            if named && row.get_int("goodsType")? == wanted {
                rows.push(row);
            }
        }
        Ok(rows)
    }

    fn construct_object(data: &GeneratorData<Self>, row: &ParamRow) -> Result<Value> {
        let product = Product::new(row.index, ProductCategory::Good);
        let recipe = data.lookup(RECIPES)?.lineups_for_product(product).next();

        let is_consumed = row.has_field("isConsume") && row.get_bool("isConsume")?;

        let mut tool = Record::new();
        tool.insert("is_consumed".into(), json!(is_consumed));
        tool.insert("craftable".into(), json!(recipe.is_some()));
        tool.insert("materials".into(), json!(recipe.map(materials).unwrap_or_default()));

        Ok(merge([
            data.get_fields_item(row, ItemFields::ALL)?,
            data.get_fields_user_data(row, &["locations", "remarks"])?,
            tool,
        ]))
    }
}

/// Required materials of a recipe, ordered by material id
fn materials(recipe: &Lineup) -> Vec<Value> {
    let mut materials: Vec<_> = recipe.materials.iter().collect();
    materials.sort();

    materials
        .into_iter()
        .map(|(material, amount)| {
            json!({
                "id": material.index,
                "category": material.category.name(),
                "amount": amount,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_support::{item_row, schemas, V};
    use crate::loaders::MemorySource;
    use crate::shop::{MATERIAL_SET_PARAM, MATERIAL_SLOTS, SHOP_LINEUP_RECIPE_PARAM};

    fn store() -> SchemaStore {
        schemas(
            "tools",
            "Tool",
            json!({
                "is_consumed": {"type": "boolean"},
                "craftable": {"type": "boolean"},
                "materials": {"type": "array"}
            }),
        )
    }

    fn tool(id: u32) -> ParamRow {
        item_row(id).with_field("goodsType", 0).with_field("isConsume", 1)
    }

    fn recipe(id: u32, product: u32, material_set: i64) -> ParamRow {
        ParamRow::new(id, "", ItemIdFlag::NonEquippable)
            .with_field("equipId", product)
            .with_field("equipType", 3)
            .with_field("value", 0)
            .with_field("costType", 0)
            .with_field("mtrlId", material_set)
    }

    fn material_set(id: u32, slots: &[(u32, u32)]) -> ParamRow {
        let mut row = ParamRow::new(id, "", ItemIdFlag::NonEquippable);
        for (i, slot) in MATERIAL_SLOTS.iter().enumerate() {
            match slots.get(i) {
                Some((material, amount)) => {
                    row.insert(slot.index, material);
                    row.insert(slot.category, 4);
                    row.insert(slot.quantity, amount);
                }
                None => {
                    row.insert(slot.index, -1);
                    row.insert(slot.category, 0);
                    row.insert(slot.quantity, 0);
                }
            }
        }
        row
    }

    fn source() -> MemorySource {
        MemorySource::new()
            .with_params(
                V,
                "EquipParamGoods",
                [
                    tool(100),
                    tool(200).with_field("isConsume", 0),
                    tool(300),
                    item_row(400).with_field("goodsType", 1),
                ],
            )
            .with_msgs(
                V,
                "GoodsName",
                [(100, "Fire Pot"), (200, "Lantern"), (400, "Rold Medallion")],
            )
            .with_msgs(V, "GoodsInfo", Vec::<(u32, String)>::new())
            .with_msgs(V, "GoodsCaption", Vec::<(u32, String)>::new())
            .with_params(V, SHOP_LINEUP_RECIPE_PARAM, [recipe(1, 100, 7)])
            .with_params(V, MATERIAL_SET_PARAM, [material_set(7, &[(15000, 1), (20760, 3)])])
    }

    #[test]
    fn test_generate_tools() {
        let output = GeneratorData::<Tools>::construct(&source(), &store(), &V)
            .unwrap()
            .generate()
            .unwrap();

        assert_eq!(
            output.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["Fire Pot", "Lantern"]
        );

        let pot = &output["Fire Pot"];
        assert_eq!(pot["craftable"], json!(true));
        assert_eq!(pot["is_consumed"], json!(true));
        assert_eq!(
            pot["materials"],
            json!([
                {"id": 15000, "category": "good", "amount": 1},
                {"id": 20760, "category": "good", "amount": 3}
            ])
        );

        let lantern = &output["Lantern"];
        assert_eq!(lantern["craftable"], json!(false));
        assert_eq!(lantern["is_consumed"], json!(false));
        assert_eq!(lantern["materials"], json!([]));
    }

    #[test]
    fn test_missing_recipe_table_fails() {
        let source = MemorySource::new()
            .with_params(V, "EquipParamGoods", [tool(100)])
            .with_msgs(V, "GoodsName", [(100, "Fire Pot")])
            .with_msgs(V, "GoodsInfo", Vec::<(u32, String)>::new())
            .with_msgs(V, "GoodsCaption", Vec::<(u32, String)>::new());
        assert!(GeneratorData::<Tools>::construct(&source, &store(), &V).is_err());
    }
}
