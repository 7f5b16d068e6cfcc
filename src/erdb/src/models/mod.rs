//! Validated numeric tables consumed by item construction
//!
//! Both tables are exported by external tooling as JSON objects keyed by
//! param row id. Every entry is checked on load; a single bad entry rejects
//! the whole file.

mod correction_graph;
mod reinforcement;

pub use correction_graph::{CorrectionGraph, CORRECTION_GRAPH_LEN};
pub use reinforcement::{
    DamageMultiplier, GuardMultiplier, Reinforcement, ReinforcementLevel, ResistanceMultiplier,
    ScalingMultiplier, MAX_LEVEL, MAX_LEVELS,
};

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Load a `{"<id>": [151 floats], ...}` correction graph table
pub fn load_correction_graphs(path: impl AsRef<Path>) -> Result<BTreeMap<u32, CorrectionGraph>> {
    let raw: BTreeMap<String, Vec<f64>> = read_json(path.as_ref())?;
    raw.into_iter()
        .map(|(id, values)| {
            let graph = CorrectionGraph::new(values).map_err(|e| in_entry("correction graph", &id, e))?;
            Ok((parse_id(&id)?, graph))
        })
        .collect()
}

/// Load a `{"<id>": [levels...], ...}` reinforcement table
pub fn load_reinforcements(path: impl AsRef<Path>) -> Result<BTreeMap<u32, Reinforcement>> {
    let raw: BTreeMap<String, Vec<ReinforcementLevel>> = read_json(path.as_ref())?;
    raw.into_iter()
        .map(|(id, levels)| {
            let curve = Reinforcement::new(levels).map_err(|e| in_entry("reinforcement", &id, e))?;
            Ok((parse_id(&id)?, curve))
        })
        .collect()
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|e| {
        Error::SchemaViolation(format!("{}: {}", path.display(), e))
    })
}

fn parse_id(id: &str) -> Result<u32> {
    id.parse()
        .map_err(|_| Error::SchemaViolation(format!("table key '{}' is not a row id", id)))
}

fn in_entry(kind: &str, id: &str, err: Error) -> Error {
    match err {
        Error::SchemaViolation(msg) => Error::SchemaViolation(format!("{} {}: {}", kind, id, msg)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn level_json(level: u32) -> serde_json::Value {
        serde_json::json!({
            "level": level,
            "damage": {"physical": 1.0, "magic": 1.0, "fire": 1.0, "lightning": 1.0, "holy": 1.0, "stamina": 1.0},
            "scaling": {"strength": 1.0, "dexterity": 1.0, "intelligence": 1.0, "faith": 1.0, "arcane": 1.0},
            "guard": {"physical": 1.0, "magic": 1.0, "fire": 1.0, "lightning": 1.0, "holy": 1.0, "guard_boost": 1.0},
            "resistance": {"bleed": 1.0, "frostbite": 1.0, "poison": 1.0, "scarlet_rot": 1.0, "sleep": 1.0, "madness": 1.0, "death_blight": 1.0}
        })
    }

    #[test]
    fn test_load_correction_graphs() {
        let table = serde_json::json!({ "0": vec![0.5; 151], "12": vec![1.0; 151] });
        let file = write_temp(&table.to_string());

        let graphs = load_correction_graphs(file.path()).unwrap();
        assert_eq!(graphs.keys().copied().collect::<Vec<_>>(), vec![0, 12]);
        assert_eq!(graphs[&12].at(150), Some(1.0));
    }

    #[test]
    fn test_load_correction_graphs_names_bad_entry() {
        let table = serde_json::json!({ "0": vec![0.5; 151], "7": vec![0.5; 20] });
        let file = write_temp(&table.to_string());

        let err = load_correction_graphs(file.path()).unwrap_err();
        assert!(matches!(err, Error::SchemaViolation(_)));
        assert!(err.to_string().contains("correction graph 7"));
    }

    #[test]
    fn test_load_reinforcements() {
        let levels: Vec<_> = (0..26).map(level_json).collect();
        let table = serde_json::json!({ "0": levels, "100": [level_json(0)] });
        let file = write_temp(&table.to_string());

        let curves = load_reinforcements(file.path()).unwrap();
        assert_eq!(curves[&0].levels().len(), 26);
        assert_eq!(curves[&100].max_level(), 0);
    }

    #[test]
    fn test_load_reinforcements_rejects_empty_curve() {
        let file = write_temp(r#"{"3": []}"#);
        let err = load_reinforcements(file.path()).unwrap_err();
        assert!(err.to_string().contains("reinforcement 3"));
    }

    #[test]
    fn test_non_numeric_key_rejected() {
        let table = serde_json::json!({ "standard": vec![0.5; 151] });
        let file = write_temp(&table.to_string());
        assert!(load_correction_graphs(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load_reinforcements("/nonexistent/reinforcements.json"),
            Err(Error::Io(_))
        ));
    }
}
