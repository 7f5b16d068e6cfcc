//! Shop lineups and their material costs
//!
//! A shop lineup row names a product, its price and currency, and optionally
//! references a material set row listing up to six required materials. The
//! [`Lookup`] joins both tables once per game version.

mod lookup;
mod types;

pub use lookup::Lookup;
pub use types::{
    Currency, Lineup, Material, MaterialCategory, MaterialSlot, Product, ProductCategory,
    MATERIAL_SLOTS,
};

/// Param table holding regular shop lineups
pub const SHOP_LINEUP_PARAM: &str = "ShopLineupParam";

/// Param table holding crafting recipe lineups
pub const SHOP_LINEUP_RECIPE_PARAM: &str = "ShopLineupParam_Recipe";

/// Param table holding material sets
pub const MATERIAL_SET_PARAM: &str = "EquipMtrlSetParam";
