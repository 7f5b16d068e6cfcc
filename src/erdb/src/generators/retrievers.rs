//! Descriptors naming the data an entity type needs.
//!
//! Retrievers are plain `const` values so entity types can declare them as
//! associated constants; they hold no data and cache nothing.

use tracing::debug;

use crate::loaders::{DataSource, UserData};
use crate::params::{IdRange, ItemIdFlag, MsgDict, ParamDict};
use crate::shop::{Lookup, MATERIAL_SET_PARAM, SHOP_LINEUP_PARAM, SHOP_LINEUP_RECIPE_PARAM};
use crate::{GameVersion, Result};

/// A param table, optionally narrowed to an id range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamDictRetriever {
    pub file_name: &'static str,
    pub item_id_flag: ItemIdFlag,
    pub id_range: IdRange,
}

impl ParamDictRetriever {
    pub const fn new(file_name: &'static str, item_id_flag: ItemIdFlag) -> Self {
        Self {
            file_name,
            item_id_flag,
            id_range: IdRange::ALL,
        }
    }

    pub const fn with_range(self, id_min: Option<u32>, id_max: Option<u32>) -> Self {
        Self {
            id_range: IdRange::new(id_min, id_max),
            ..self
        }
    }

    pub fn get<S: DataSource + ?Sized>(&self, source: &S, version: &GameVersion) -> Result<ParamDict> {
        debug!(
            "Retrieving {} ({}, {:?})",
            self.file_name, self.item_id_flag, self.id_range
        );
        source.load_params(self.file_name, version, self.item_id_flag, self.id_range)
    }
}

/// A message table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MsgsRetriever {
    pub file_name: &'static str,
}

impl MsgsRetriever {
    pub const fn new(file_name: &'static str) -> Self {
        Self { file_name }
    }

    pub fn get<S: DataSource + ?Sized>(&self, source: &S, version: &GameVersion) -> Result<MsgDict> {
        debug!("Retrieving messages {}", self.file_name);
        source.load_msgs(self.file_name, version)
    }
}

/// Shop lineups joined with their material sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupRetriever {
    pub shop_lineup_range: IdRange,
    pub material_set_range: IdRange,
    /// Read crafting recipes instead of regular shop lineups
    pub recipe: bool,
}

impl LookupRetriever {
    pub const fn new(
        shop_lineup_id_min: Option<u32>,
        shop_lineup_id_max: Option<u32>,
        material_set_id_min: Option<u32>,
        material_set_id_max: Option<u32>,
    ) -> Self {
        Self {
            shop_lineup_range: IdRange::new(shop_lineup_id_min, shop_lineup_id_max),
            material_set_range: IdRange::new(material_set_id_min, material_set_id_max),
            recipe: false,
        }
    }

    pub const fn recipe(self) -> Self {
        Self {
            recipe: true,
            ..self
        }
    }

    pub const fn shop_param(&self) -> &'static str {
        if self.recipe {
            SHOP_LINEUP_RECIPE_PARAM
        } else {
            SHOP_LINEUP_PARAM
        }
    }

    pub fn get<S: DataSource + ?Sized>(&self, source: &S, version: &GameVersion) -> Result<Lookup> {
        let shop = ParamDictRetriever {
            file_name: self.shop_param(),
            item_id_flag: ItemIdFlag::NonEquippable,
            id_range: self.shop_lineup_range,
        };
        let materials = ParamDictRetriever {
            file_name: MATERIAL_SET_PARAM,
            item_id_flag: ItemIdFlag::NonEquippable,
            id_range: self.material_set_range,
        };

        Lookup::new(&shop.get(source, version)?, &materials.get(source, version)?)
    }
}

/// Hand-maintained data for one element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserDataRetriever {
    pub element_name: &'static str,
}

impl UserDataRetriever {
    pub const fn new(element_name: &'static str) -> Self {
        Self { element_name }
    }

    pub fn get<S: DataSource + ?Sized>(&self, source: &S, version: &GameVersion) -> Result<UserData> {
        source.load_user_data(self.element_name, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::MemorySource;
    use crate::params::ParamRow;

    const V: GameVersion = GameVersion::new(1, 10, 0);

    fn shop_source() -> MemorySource {
        let lineup = |id: u32| {
            ParamRow::new(id, "", ItemIdFlag::Goods)
                .with_field("equipId", id)
                .with_field("equipType", 3)
                .with_field("value", 0)
                .with_field("costType", 0)
                .with_field("mtrlId", -1)
        };
        MemorySource::new()
            .with_params(V, SHOP_LINEUP_PARAM, [lineup(1), lineup(2)])
            .with_params(V, SHOP_LINEUP_RECIPE_PARAM, [lineup(300), lineup(400), lineup(500)])
            .with_params(V, MATERIAL_SET_PARAM, [])
    }

    #[test]
    fn test_param_retriever_range() {
        const GEMS: ParamDictRetriever =
            ParamDictRetriever::new("EquipParamGem", ItemIdFlag::Gems).with_range(Some(10000), None);
        assert_eq!(GEMS.id_range, IdRange::new(Some(10000), None));

        let source = MemorySource::new().with_params(
            V,
            "EquipParamGem",
            [ParamRow::new(1, "", ItemIdFlag::Gems), ParamRow::new(10000, "", ItemIdFlag::Gems)],
        );
        assert_eq!(GEMS.get(&source, &V).unwrap().len(), 1);
    }

    #[test]
    fn test_lookup_retriever_selects_table() {
        let source = shop_source();

        let shop = LookupRetriever::new(None, None, None, None);
        assert_eq!(shop.get(&source, &V).unwrap().len(), 2);

        let recipes = LookupRetriever::new(Some(400), None, None, None).recipe();
        assert_eq!(recipes.shop_param(), SHOP_LINEUP_RECIPE_PARAM);
        assert_eq!(recipes.get(&source, &V).unwrap().len(), 2);
    }

    #[test]
    fn test_retrievers_surface_missing_tables() {
        let source = MemorySource::new();
        assert!(MsgsRetriever::new("GoodsName").get(&source, &V).is_err());
        assert!(LookupRetriever::new(None, None, None, None).get(&source, &V).is_err());
        assert!(UserDataRetriever::new("Tools").get(&source, &V).unwrap().is_empty());
    }
}
