//! Validate command handlers

use std::path::Path;

use anyhow::{Context, Result};
use erdb::models::{load_correction_graphs, load_reinforcements};

/// Handle `validate correction-graph`
pub fn correction_graph(input: &Path) -> Result<()> {
    let graphs = load_correction_graphs(input)
        .with_context(|| format!("Invalid correction graph table {}", input.display()))?;

    println!("{}: {} correction graphs OK", input.display(), graphs.len());
    Ok(())
}

/// Handle `validate reinforcement`
pub fn reinforcement(input: &Path) -> Result<()> {
    let curves = load_reinforcements(input)
        .with_context(|| format!("Invalid reinforcement table {}", input.display()))?;

    let levels: usize = curves.values().map(|c| c.levels().len()).sum();
    println!(
        "{}: {} reinforcements ({} levels) OK",
        input.display(),
        curves.len(),
        levels
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_correction_graph_table() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        fs::write(&good, serde_json::json!({ "0": vec![0.0; 151] }).to_string()).unwrap();
        fs::write(&bad, serde_json::json!({ "0": vec![-1.0; 151] }).to_string()).unwrap();

        assert!(correction_graph(&good).is_ok());
        let err = correction_graph(&bad).unwrap_err();
        assert!(format!("{:#}", err).contains("negative"));
    }

    #[test]
    fn test_reinforcement_table_missing() {
        let dir = TempDir::new().unwrap();
        assert!(reinforcement(&dir.path().join("missing.json")).is_err());
    }
}
