//! Shop value types

use std::collections::HashMap;
use std::fmt;

use crate::params::ParamRow;
use crate::{Error, Result};

/// Category of a required material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MaterialCategory {
    None = 0,
    Protector = 1,
    Good = 4,
    Unknown = 15,
}

impl MaterialCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Protector => "protector",
            Self::Good => "good",
            Self::Unknown => "unknown",
        }
    }
}

impl TryFrom<i64> for MaterialCategory {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Protector),
            4 => Ok(Self::Good),
            15 => Ok(Self::Unknown),
            _ => Err(Error::UnknownEnumValue {
                kind: "material category",
                value,
            }),
        }
    }
}

/// Category of a purchasable product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProductCategory {
    Weapon = 0,
    Protector = 1,
    Accessory = 2,
    Good = 3,
    Ashes = 4,
}

impl TryFrom<i64> for ProductCategory {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Self::Weapon),
            1 => Ok(Self::Protector),
            2 => Ok(Self::Accessory),
            3 => Ok(Self::Good),
            4 => Ok(Self::Ashes),
            _ => Err(Error::UnknownEnumValue {
                kind: "product category",
                value,
            }),
        }
    }
}

/// Currency a lineup is paid in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    #[default]
    Runes = 0,
    DragonHeart = 1,
    StarlightShard = 2,
    Unknown = 3,
    LostAshesOfWar = 4,
}

impl TryFrom<i64> for Currency {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Self::Runes),
            1 => Ok(Self::DragonHeart),
            2 => Ok(Self::StarlightShard),
            3 => Ok(Self::Unknown),
            4 => Ok(Self::LostAshesOfWar),
            _ => Err(Error::UnknownEnumValue {
                kind: "currency",
                value,
            }),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Runes => write!(f, "runes"),
            Self::DragonHeart => write!(f, "dragon_heart"),
            Self::StarlightShard => write!(f, "starlight_shard"),
            Self::Unknown => write!(f, "unknown"),
            Self::LostAshesOfWar => write!(f, "lost_ashes_of_war"),
        }
    }
}

/// A crafting or upgrade material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Material {
    pub index: u32,
    pub category: MaterialCategory,
}

impl Material {
    pub const fn new(index: u32, category: MaterialCategory) -> Self {
        Self { index, category }
    }
}

/// A purchasable or craftable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Product {
    pub index: u32,
    pub category: ProductCategory,
}

impl Product {
    pub const fn new(index: u32, category: ProductCategory) -> Self {
        Self { index, category }
    }
}

/// Field names of one material slot in a material set row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialSlot {
    pub index: &'static str,
    pub category: &'static str,
    pub quantity: &'static str,
}

/// The six material slots of `EquipMtrlSetParam`
pub const MATERIAL_SLOTS: [MaterialSlot; 6] = [
    MaterialSlot { index: "materialId01", category: "materialCate01", quantity: "itemNum01" },
    MaterialSlot { index: "materialId02", category: "materialCate02", quantity: "itemNum02" },
    MaterialSlot { index: "materialId03", category: "materialCate03", quantity: "itemNum03" },
    MaterialSlot { index: "materialId04", category: "materialCate04", quantity: "itemNum04" },
    MaterialSlot { index: "materialId05", category: "materialCate05", quantity: "itemNum05" },
    MaterialSlot { index: "materialId06", category: "materialCate06", quantity: "itemNum06" },
];

/// Sentinel material id marking an unused slot
const EMPTY_SLOT: i64 = -1;

/// One shop offer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lineup {
    pub product: Product,
    /// Read through `get_int_corrected`, so the shop's `-1` "default price"
    /// sentinel is stored as 0 and cannot be told apart from a free offer
    pub price: u32,
    /// Material → required quantity
    pub materials: HashMap<Material, u32>,
    pub currency: Currency,
}

impl Lineup {
    /// Build a lineup from a shop lineup row and the material set it references.
    ///
    /// Slots whose id field is `-1` are skipped; the remaining slots need not be
    /// contiguous. A material listed twice keeps the quantity of its last slot.
    pub fn from_params(lineup_param: &ParamRow, material_set: &ParamRow) -> Result<Self> {
        let mut lineup = Self::without_materials(lineup_param)?;

        for slot in &MATERIAL_SLOTS {
            let mat_id = material_set.get_int(slot.index)?;
            if mat_id == EMPTY_SLOT {
                continue;
            }

            let category = MaterialCategory::try_from(material_set.get_int(slot.category)?)?;
            let material = Material::new(to_u32(material_set, slot.index, mat_id)?, category);
            let quantity = material_set.get_int(slot.quantity)?;
            lineup
                .materials
                .insert(material, to_u32(material_set, slot.quantity, quantity)?);
        }

        Ok(lineup)
    }

    /// Build a lineup whose material set could not be resolved
    pub fn without_materials(lineup_param: &ParamRow) -> Result<Self> {
        let equip_id = lineup_param.get_int("equipId")?;
        let product = Product::new(
            to_u32(lineup_param, "equipId", equip_id)?,
            ProductCategory::try_from(lineup_param.get_int("equipType")?)?,
        );

        let price = lineup_param.get_int_corrected("value")?;

        Ok(Self {
            product,
            price: to_u32(lineup_param, "value", price)?,
            materials: HashMap::new(),
            currency: Currency::try_from(lineup_param.get_int("costType")?)?,
        })
    }
}

fn to_u32(row: &ParamRow, field: &str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::InvalidField {
        row: row.index,
        field: field.to_string(),
        value: value.to_string(),
        expected: "a non-negative 32-bit integer",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ItemIdFlag;

    fn lineup_row() -> ParamRow {
        ParamRow::new(100, "", ItemIdFlag::NonEquippable)
            .with_field("equipId", 100)
            .with_field("equipType", 3)
            .with_field("value", 200)
            .with_field("costType", 0)
            .with_field("mtrlId", 7)
    }

    fn empty_material_set(id: u32) -> ParamRow {
        let mut row = ParamRow::new(id, "", ItemIdFlag::NonEquippable);
        for slot in &MATERIAL_SLOTS {
            row.insert(slot.index, -1);
            row.insert(slot.category, 0);
            row.insert(slot.quantity, 0);
        }
        row
    }

    #[test]
    fn test_from_params_single_slot() {
        let mats = empty_material_set(7)
            .with_field("materialId01", 50)
            .with_field("materialCate01", 4)
            .with_field("itemNum01", 3);

        let lineup = Lineup::from_params(&lineup_row(), &mats).unwrap();
        assert_eq!(lineup.product, Product::new(100, ProductCategory::Good));
        assert_eq!(lineup.price, 200);
        assert_eq!(lineup.currency, Currency::Runes);
        assert_eq!(lineup.materials.len(), 1);
        assert_eq!(
            lineup.materials.get(&Material::new(50, MaterialCategory::Good)),
            Some(&3)
        );
    }

    #[test]
    fn test_from_params_sparse_slots() {
        let mats = empty_material_set(7)
            .with_field("materialId02", 20)
            .with_field("materialCate02", 4)
            .with_field("itemNum02", 1)
            .with_field("materialId05", 21)
            .with_field("materialCate05", 1)
            .with_field("itemNum05", 2);

        let lineup = Lineup::from_params(&lineup_row(), &mats).unwrap();
        assert_eq!(lineup.materials.len(), 2);
        assert_eq!(lineup.materials[&Material::new(20, MaterialCategory::Good)], 1);
        assert_eq!(lineup.materials[&Material::new(21, MaterialCategory::Protector)], 2);
    }

    #[test]
    fn test_from_params_all_slots_empty() {
        let lineup = Lineup::from_params(&lineup_row(), &empty_material_set(7)).unwrap();
        assert!(lineup.materials.is_empty());
    }

    #[test]
    fn test_from_params_duplicate_material_last_wins() {
        let mats = empty_material_set(7)
            .with_field("materialId01", 50)
            .with_field("materialCate01", 4)
            .with_field("itemNum01", 3)
            .with_field("materialId03", 50)
            .with_field("materialCate03", 4)
            .with_field("itemNum03", 9);

        let lineup = Lineup::from_params(&lineup_row(), &mats).unwrap();
        assert_eq!(lineup.materials.len(), 1);
        assert_eq!(lineup.materials[&Material::new(50, MaterialCategory::Good)], 9);
    }

    #[test]
    fn test_currency_and_unknown_codes() {
        let row = lineup_row().with_field("costType", 4);
        let lineup = Lineup::without_materials(&row).unwrap();
        assert_eq!(lineup.currency, Currency::LostAshesOfWar);

        let bad = lineup_row().with_field("equipType", 9);
        assert!(matches!(
            Lineup::without_materials(&bad),
            Err(Error::UnknownEnumValue { kind: "product category", value: 9 })
        ));
    }

    #[test]
    fn test_negative_price_reads_as_zero() {
        let row = lineup_row().with_field("value", -1);
        assert_eq!(Lineup::without_materials(&row).unwrap().price, 0);
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(
            Material::new(1, MaterialCategory::Good),
            Material::new(1, MaterialCategory::Good)
        );
        assert_ne!(
            Material::new(1, MaterialCategory::Good),
            Material::new(1, MaterialCategory::Protector)
        );
        assert_ne!(
            Product::new(1, ProductCategory::Weapon),
            Product::new(1, ProductCategory::Ashes)
        );
    }
}
