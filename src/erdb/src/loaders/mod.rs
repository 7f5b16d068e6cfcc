//! Data sources for param tables, message tables and user data.
//!
//! Generators never read files themselves; they go through a [`DataSource`].
//! [`FileSource`] reads the on-disk dump layout, [`MemorySource`] holds the
//! same data in memory.

mod file;
mod memory;

pub use file::FileSource;
pub use memory::MemorySource;

use std::collections::BTreeMap;

use crate::params::{IdRange, ItemIdFlag, MsgDict, ParamDict};
use crate::{GameVersion, Result};

/// Hand-maintained fields of one entity: field name → value
pub type UserFields = serde_json::Map<String, serde_json::Value>;

/// Hand-maintained data of one element, keyed by display name without colons
pub type UserData = BTreeMap<String, UserFields>;

/// Trait for every backend that can serve game data for a version
pub trait DataSource {
    /// Load a param table, tagging each row with `flag` and keeping only the
    /// rows whose id falls inside `range`
    fn load_params(
        &self,
        table: &str,
        version: &GameVersion,
        flag: ItemIdFlag,
        range: IdRange,
    ) -> Result<ParamDict>;

    /// Load a message table; entries without text are absent
    fn load_msgs(&self, table: &str, version: &GameVersion) -> Result<MsgDict>;

    /// Load the user data of one element. Absence is not an error.
    fn load_user_data(&self, element: &str, version: &GameVersion) -> Result<UserData>;
}

impl<T: DataSource + ?Sized> DataSource for &T {
    fn load_params(
        &self,
        table: &str,
        version: &GameVersion,
        flag: ItemIdFlag,
        range: IdRange,
    ) -> Result<ParamDict> {
        (**self).load_params(table, version, flag, range)
    }

    fn load_msgs(&self, table: &str, version: &GameVersion) -> Result<MsgDict> {
        (**self).load_msgs(table, version)
    }

    fn load_user_data(&self, element: &str, version: &GameVersion) -> Result<UserData> {
        (**self).load_user_data(element, version)
    }
}
