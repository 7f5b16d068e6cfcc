//! Code tables for param enum fields

use crate::{Error, Result};

/// `EquipParamGoods.goodsType`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoodsType {
    NormalItem = 0,
    KeyItem = 1,
    CraftingMaterial = 2,
    Remembrance = 3,
    Sorcery = 5,
    SpiritSummonLesser = 7,
    SpiritSummonGreater = 8,
    WondrousPhysick = 9,
    WondrousPhysickTear = 10,
    RegenerativeMaterial = 11,
    InfoItem = 12,
    ReinforcementMaterial = 14,
    GreatRune = 15,
    Incantation = 16,
    SelfBuffSorcery = 17,
    SelfBuffIncantation = 18,
}

impl TryFrom<i64> for GoodsType {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Ok(match value {
            0 => Self::NormalItem,
            1 => Self::KeyItem,
            2 => Self::CraftingMaterial,
            3 => Self::Remembrance,
            5 => Self::Sorcery,
            7 => Self::SpiritSummonLesser,
            8 => Self::SpiritSummonGreater,
            9 => Self::WondrousPhysick,
            10 => Self::WondrousPhysickTear,
            11 => Self::RegenerativeMaterial,
            12 => Self::InfoItem,
            14 => Self::ReinforcementMaterial,
            15 => Self::GreatRune,
            16 => Self::Incantation,
            17 => Self::SelfBuffSorcery,
            18 => Self::SelfBuffIncantation,
            _ => {
                return Err(Error::UnknownEnumValue {
                    kind: "goods type",
                    value,
                })
            }
        })
    }
}

/// Weapon affinity, indexed by `defaultWepAttr` and the
/// `configurableWepAttrNN` flags
#[derive(Debug, Clone, PartialEq)]
pub struct Affinity {
    pub id: u8,
    pub name: &'static str,
}

pub const AFFINITIES: &[Affinity] = &[
    Affinity { id: 0, name: "Standard" },
    Affinity { id: 1, name: "Heavy" },
    Affinity { id: 2, name: "Keen" },
    Affinity { id: 3, name: "Quality" },
    Affinity { id: 4, name: "Fire" },
    Affinity { id: 5, name: "Flame Art" },
    Affinity { id: 6, name: "Lightning" },
    Affinity { id: 7, name: "Sacred" },
    Affinity { id: 8, name: "Magic" },
    Affinity { id: 9, name: "Cold" },
    Affinity { id: 10, name: "Poison" },
    Affinity { id: 11, name: "Blood" },
    Affinity { id: 12, name: "Occult" },
];

pub fn affinity_by_id(id: i64) -> Result<&'static Affinity> {
    AFFINITIES
        .iter()
        .find(|a| i64::from(a.id) == id)
        .ok_or(Error::UnknownEnumValue {
            kind: "affinity",
            value: id,
        })
}

impl Affinity {
    /// Name of the gem flag that allows this affinity
    pub fn configurable_field(&self) -> String {
        format!("configurableWepAttr{:02}", self.id)
    }
}

/// Armament class and the `canMountWep_*` suffix that marks it on a gem
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponClass {
    pub name: &'static str,
    pub mount_suffix: &'static str,
}

pub const WEAPON_CLASSES: &[WeaponClass] = &[
    WeaponClass { name: "Dagger", mount_suffix: "Dagger" },
    WeaponClass { name: "Straight Sword", mount_suffix: "SwordNormal" },
    WeaponClass { name: "Greatsword", mount_suffix: "SwordLarge" },
    WeaponClass { name: "Colossal Sword", mount_suffix: "SwordGigantic" },
    WeaponClass { name: "Curved Sword", mount_suffix: "SaberNormal" },
    WeaponClass { name: "Curved Greatsword", mount_suffix: "SaberLarge" },
    WeaponClass { name: "Katana", mount_suffix: "katana" },
    WeaponClass { name: "Twinblade", mount_suffix: "SwordDoubleEdge" },
    WeaponClass { name: "Thrusting Sword", mount_suffix: "SwordPierce" },
    WeaponClass { name: "Heavy Thrusting Sword", mount_suffix: "RapierHeavy" },
    WeaponClass { name: "Axe", mount_suffix: "AxeNormal" },
    WeaponClass { name: "Greataxe", mount_suffix: "AxeLarge" },
    WeaponClass { name: "Hammer", mount_suffix: "HammerNormal" },
    WeaponClass { name: "Great Hammer", mount_suffix: "HammerLarge" },
    WeaponClass { name: "Flail", mount_suffix: "Flail" },
    WeaponClass { name: "Spear", mount_suffix: "SpearNormal" },
    WeaponClass { name: "Great Spear", mount_suffix: "SpearLarge" },
    WeaponClass { name: "Halberd", mount_suffix: "SpearAxe" },
    WeaponClass { name: "Reaper", mount_suffix: "Sickle" },
    WeaponClass { name: "Fist", mount_suffix: "Knuckle" },
    WeaponClass { name: "Claw", mount_suffix: "Claw" },
    WeaponClass { name: "Whip", mount_suffix: "Whip" },
    WeaponClass { name: "Colossal Weapon", mount_suffix: "AxhammerLarge" },
    WeaponClass { name: "Light Bow", mount_suffix: "BowSmall" },
    WeaponClass { name: "Bow", mount_suffix: "BowNormal" },
    WeaponClass { name: "Greatbow", mount_suffix: "BowLarge" },
    WeaponClass { name: "Crossbow", mount_suffix: "ClossBow" },
    WeaponClass { name: "Ballista", mount_suffix: "Ballista" },
    WeaponClass { name: "Glintstone Staff", mount_suffix: "Staff" },
    WeaponClass { name: "Sacred Seal", mount_suffix: "Talisman" },
    WeaponClass { name: "Small Shield", mount_suffix: "ShieldSmall" },
    WeaponClass { name: "Medium Shield", mount_suffix: "ShieldNormal" },
    WeaponClass { name: "Greatshield", mount_suffix: "ShieldLarge" },
    WeaponClass { name: "Torch", mount_suffix: "Torch" },
];

impl WeaponClass {
    pub fn mount_field(&self) -> String {
        format!("canMountWep_{}", self.mount_suffix)
    }
}

/// `EquipParamGoods.sortGroupId` categories used by bolstering materials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoodsSortGroup {
    Group1 = 1,
    Group2 = 2,
    Group3 = 3,
    Group4 = 4,
}

impl TryFrom<i64> for GoodsSortGroup {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            1 => Ok(Self::Group1),
            2 => Ok(Self::Group2),
            3 => Ok(Self::Group3),
            4 => Ok(Self::Group4),
            _ => Err(Error::UnknownEnumValue {
                kind: "goods sort group",
                value,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goods_type_codes() {
        assert_eq!(GoodsType::try_from(14).unwrap(), GoodsType::ReinforcementMaterial);
        assert_eq!(GoodsType::try_from(0).unwrap(), GoodsType::NormalItem);
        assert!(GoodsType::try_from(4).is_err());
    }

    #[test]
    fn test_affinity_lookup() {
        assert_eq!(affinity_by_id(5).unwrap().name, "Flame Art");
        assert_eq!(affinity_by_id(11).unwrap().configurable_field(), "configurableWepAttr11");
        assert!(affinity_by_id(99).is_err());
    }

    #[test]
    fn test_weapon_class_field() {
        let katana = WEAPON_CLASSES.iter().find(|c| c.name == "Katana").unwrap();
        assert_eq!(katana.mount_field(), "canMountWep_katana");
    }

    #[test]
    fn test_weapon_class_names_unique() {
        let mut names: Vec<&str> = WEAPON_CLASSES.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), WEAPON_CLASSES.len());
    }
}
