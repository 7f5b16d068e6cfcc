//! Data source backed by JSON table dumps on disk
//!
//! Layout under the root directory:
//!
//! ```text
//! <root>/<version>/params/<Table>.json    {"rows": [{"id", "name", "fields"}]}
//! <root>/<version>/msgs/<Table>.json      {"<id>": "text" | null}
//! <root>/contrib/<Element>/<version>.json {"<name>": {"<field>": value}}
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::{DataSource, UserData};
use crate::params::{IdRange, ItemIdFlag, MsgDict, ParamDict, ParamRow};
use crate::{Error, GameVersion, Result};

/// Placeholder the message dumps use for entries with no text
const NULL_MSG: &str = "%null%";

const CONTRIB_DIR: &str = "contrib";

#[derive(Deserialize)]
struct ParamFile {
    rows: Vec<RawRow>,
}

#[derive(Deserialize)]
struct RawRow {
    id: u32,
    #[serde(default)]
    name: String,
    #[serde(default)]
    fields: serde_json::Map<String, serde_json::Value>,
}

impl RawRow {
    fn into_row(self, flag: ItemIdFlag) -> ParamRow {
        let mut row = ParamRow::new(self.id, self.name, flag);
        for (field, value) in self.fields {
            match value {
                serde_json::Value::Null => {}
                serde_json::Value::String(s) => row.insert(field, s),
                serde_json::Value::Bool(b) => row.insert(field, u8::from(b)),
                other => row.insert(field, other),
            }
        }
        row
    }
}

/// Reads game data from a directory of JSON dumps
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Game versions with a data directory, oldest first
    pub fn versions(&self) -> Result<Vec<GameVersion>> {
        let mut versions: Vec<GameVersion> = fs::read_dir(&self.root)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().to_str()?.parse().ok())
            .collect();
        versions.sort();
        Ok(versions)
    }

    /// Data directory of `version`, which may be zero padded on disk (`1.09.0`)
    fn version_dir(&self, version: &GameVersion) -> Result<PathBuf> {
        let canonical = self.root.join(version.to_string());
        if canonical.is_dir() || !self.root.is_dir() {
            return Ok(canonical);
        }

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let parsed = entry
                .file_name()
                .to_str()
                .and_then(|name| name.parse::<GameVersion>().ok());
            if parsed.is_some_and(|v| v == *version) && entry.path().is_dir() {
                return Ok(entry.path());
            }
        }
        Ok(canonical)
    }

    fn table_path(&self, version: &GameVersion, kind: &str, table: &str) -> Result<PathBuf> {
        Ok(self
            .version_dir(version)?
            .join(kind)
            .join(format!("{}.json", table)))
    }

    fn read_table(&self, version: &GameVersion, kind: &'static str, table: &str) -> Result<String> {
        let dir = if kind == "param" { "params" } else { "msgs" };
        let path = self.table_path(version, dir, table)?;
        if !path.is_file() {
            return Err(Error::MissingTable {
                kind,
                name: table.to_string(),
                version: version.to_string(),
            });
        }
        debug!("Reading {}", path.display());
        Ok(fs::read_to_string(path)?)
    }

    /// Newest user data file for `element` whose version is not above `version`
    fn user_data_file(&self, element: &str, version: &GameVersion) -> Result<Option<PathBuf>> {
        let dir = self.root.join(CONTRIB_DIR).join(element);
        if !dir.is_dir() {
            return Ok(None);
        }

        let mut best: Option<(GameVersion, PathBuf)> = None;
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(file_version) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<GameVersion>().ok())
            else {
                continue;
            };
            if file_version > *version {
                continue;
            }
            if best.as_ref().map_or(true, |(v, _)| file_version > *v) {
                best = Some((file_version, path));
            }
        }

        Ok(best.map(|(_, path)| path))
    }
}

impl DataSource for FileSource {
    fn load_params(
        &self,
        table: &str,
        version: &GameVersion,
        flag: ItemIdFlag,
        range: IdRange,
    ) -> Result<ParamDict> {
        let file: ParamFile = serde_json::from_str(&self.read_table(version, "param", table)?)?;

        let params = range.filter(
            file.rows
                .into_iter()
                .map(|raw| (raw.id, raw.into_row(flag)))
                .collect(),
        );

        debug!("Loaded {} rows from {} ({})", params.len(), table, version);
        Ok(params)
    }

    fn load_msgs(&self, table: &str, version: &GameVersion) -> Result<MsgDict> {
        let raw: BTreeMap<u32, Option<String>> =
            serde_json::from_str(&self.read_table(version, "message", table)?)?;

        Ok(raw
            .into_iter()
            .filter_map(|(id, text)| Some((id, text?)))
            .filter(|(_, text)| text != NULL_MSG)
            .collect())
    }

    fn load_user_data(&self, element: &str, version: &GameVersion) -> Result<UserData> {
        match self.user_data_file(element, version)? {
            Some(path) => {
                debug!("Reading user data {}", path.display());
                Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
            }
            None => {
                debug!("No user data for {} at {}", element, version);
                Ok(UserData::new())
            }
        }
    }
}
