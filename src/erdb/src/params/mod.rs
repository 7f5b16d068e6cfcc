//! Decoded param tables and message tables
//!
//! A param table is a set of rows keyed by integer id, each row carrying named
//! fields. Fields are kept as text the way the table dumps store them and are
//! converted on read through the typed accessors on [`ParamRow`].

pub mod enums;
mod row;

pub use row::ParamRow;

use std::collections::BTreeMap;

/// Param rows keyed by row id, in id order
pub type ParamDict = BTreeMap<u32, ParamRow>;

/// Message text keyed by message id
pub type MsgDict = BTreeMap<u32, String>;

/// High bits that tag an item id with its equipment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemIdFlag {
    Weapons,
    Protectors,
    Accessories,
    Goods,
    Gems,
    NonEquippable,
}

impl ItemIdFlag {
    pub const fn bits(self) -> u32 {
        match self {
            Self::Weapons => 0x0000_0000,
            Self::Protectors => 0x1000_0000,
            Self::Accessories => 0x2000_0000,
            Self::Goods => 0x4000_0000,
            Self::Gems => 0x8000_0000,
            Self::NonEquippable => 0xF000_0000,
        }
    }
}

impl std::fmt::Display for ItemIdFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weapons => write!(f, "weapons"),
            Self::Protectors => write!(f, "protectors"),
            Self::Accessories => write!(f, "accessories"),
            Self::Goods => write!(f, "goods"),
            Self::Gems => write!(f, "gems"),
            Self::NonEquippable => write!(f, "non-equippable"),
        }
    }
}

/// Inclusive row id bounds; `None` leaves that side open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl IdRange {
    /// Every row id
    pub const ALL: IdRange = IdRange {
        min: None,
        max: None,
    };

    pub const fn new(min: Option<u32>, max: Option<u32>) -> Self {
        Self { min, max }
    }

    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.min.map_or(true, |min| id >= min) && self.max.map_or(true, |max| id <= max)
    }

    /// Keep only the rows whose id falls inside this range
    pub fn filter(&self, params: ParamDict) -> ParamDict {
        if self.is_unbounded() {
            return params;
        }
        params
            .into_iter()
            .filter(|(id, _)| self.contains(*id))
            .collect()
    }
}
