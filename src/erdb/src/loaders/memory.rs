use std::collections::HashMap;

use super::{DataSource, UserData};
use crate::params::{IdRange, ItemIdFlag, MsgDict, ParamDict, ParamRow};
use crate::{Error, GameVersion, Result};

/// In-memory data source, filled table by table
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    params: HashMap<(GameVersion, String), Vec<ParamRow>>,
    msgs: HashMap<(GameVersion, String), MsgDict>,
    user_data: HashMap<(GameVersion, String), UserData>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows are re-tagged with the flag requested at load time
    pub fn with_params(
        mut self,
        version: GameVersion,
        table: &str,
        rows: impl IntoIterator<Item = ParamRow>,
    ) -> Self {
        self.params
            .insert((version, table.to_string()), rows.into_iter().collect());
        self
    }

    pub fn with_msgs<S: Into<String>>(
        mut self,
        version: GameVersion,
        table: &str,
        msgs: impl IntoIterator<Item = (u32, S)>,
    ) -> Self {
        let msgs = msgs.into_iter().map(|(id, s)| (id, s.into())).collect();
        self.msgs.insert((version, table.to_string()), msgs);
        self
    }

    pub fn with_user_data(mut self, version: GameVersion, element: &str, data: UserData) -> Self {
        self.user_data.insert((version, element.to_string()), data);
        self
    }
}

impl DataSource for MemorySource {
    fn load_params(
        &self,
        table: &str,
        version: &GameVersion,
        flag: ItemIdFlag,
        range: IdRange,
    ) -> Result<ParamDict> {
        let rows = self
            .params
            .get(&(*version, table.to_string()))
            .ok_or_else(|| Error::MissingTable {
                kind: "param",
                name: table.to_string(),
                version: version.to_string(),
            })?;

        Ok(range.filter(
            rows.iter()
                .map(|row| {
                    let mut row = row.clone();
                    row.item_id_flag = flag;
                    (row.index, row)
                })
                .collect(),
        ))
    }

    fn load_msgs(&self, table: &str, version: &GameVersion) -> Result<MsgDict> {
        self.msgs
            .get(&(*version, table.to_string()))
            .cloned()
            .ok_or_else(|| Error::MissingTable {
                kind: "message",
                name: table.to_string(),
                version: version.to_string(),
            })
    }

    fn load_user_data(&self, element: &str, version: &GameVersion) -> Result<UserData> {
        Ok(self
            .user_data
            .get(&(*version, element.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}
