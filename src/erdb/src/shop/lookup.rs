//! Shop lineup ↔ material set join

use std::collections::BTreeMap;
use std::ops::Index;

use super::types::{Lineup, Material, Product};
use crate::params::ParamDict;
use crate::Result;

/// Lineup field referencing a material set row
const MATERIAL_SET_REF: &str = "mtrlId";

/// Resolved shop lineups keyed by shop lineup row id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lookup {
    lineups: BTreeMap<u32, Lineup>,
}

impl Lookup {
    /// Join every shop lineup row with the material set it references.
    ///
    /// A lineup whose reference is absent, `-1`, or points outside
    /// `material_sets` still resolves, with no materials.
    pub fn new(shop_lineup: &ParamDict, material_sets: &ParamDict) -> Result<Self> {
        let mut lineups = BTreeMap::new();

        for (&id, row) in shop_lineup {
            let material_set = if row.has_field(MATERIAL_SET_REF) {
                u32::try_from(row.get_int(MATERIAL_SET_REF)?)
                    .ok()
                    .and_then(|set_id| material_sets.get(&set_id))
            } else {
                None
            };

            let lineup = match material_set {
                Some(set) => Lineup::from_params(row, set)?,
                None => Lineup::without_materials(row)?,
            };
            lineups.insert(id, lineup);
        }

        Ok(Self { lineups })
    }

    pub fn get(&self, lineup_id: u32) -> Option<&Lineup> {
        self.lineups.get(&lineup_id)
    }

    /// All lineups offering the given product, in lineup id order
    pub fn lineups_for_product(&self, product: Product) -> impl Iterator<Item = &Lineup> {
        self.lineups.values().filter(move |l| l.product == product)
    }

    /// All lineups that consume the given material, in lineup id order
    pub fn lineups_from_material(&self, material: Material) -> impl Iterator<Item = &Lineup> {
        self.lineups
            .values()
            .filter(move |l| l.materials.contains_key(&material))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Lineup)> {
        self.lineups.iter().map(|(id, l)| (*id, l))
    }

    pub fn len(&self) -> usize {
        self.lineups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lineups.is_empty()
    }
}

impl Index<u32> for Lookup {
    type Output = Lineup;

    /// Panics when no lineup has this id, like map indexing
    fn index(&self, lineup_id: u32) -> &Lineup {
        &self.lineups[&lineup_id]
    }
}
