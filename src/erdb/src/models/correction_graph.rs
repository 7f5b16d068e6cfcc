//! Attribute correction curves (`CalcCorrectGraph`)

use serde::{Deserialize, Serialize};

use crate::params::ParamRow;
use crate::{Error, Result};

/// Number of points in a correction graph: one per attribute level 0..=150
pub const CORRECTION_GRAPH_LEN: usize = 151;

/// Number of curve stages in a `CalcCorrectGraph` row
const STAGES: usize = 5;

/// Scaling ratio per attribute level, exactly 151 non-negative values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct CorrectionGraph(Vec<f64>);

impl CorrectionGraph {
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.len() != CORRECTION_GRAPH_LEN {
            return Err(Error::SchemaViolation(format!(
                "correction graph must have exactly {} items, got {}",
                CORRECTION_GRAPH_LEN,
                values.len()
            )));
        }

        if let Some((level, value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| v.is_nan() || **v < 0.0)
        {
            return Err(Error::SchemaViolation(format!(
                "correction graph value at level {} is not a non-negative number: {}",
                level, value
            )));
        }

        Ok(Self(values))
    }

    /// Compute the curve described by a `CalcCorrectGraph` row.
    ///
    /// Each stage `i` is a point (`stageMaxVal{i}`, `stageMaxGrowVal{i}`);
    /// between two points the growth follows `adjPt_maxGrowVal{i}` as an
    /// exponent (positive bends the curve late, negative bends it early).
    /// Growth values are percentages and are stored as fractions.
    pub fn from_calc_correct(row: &ParamRow) -> Result<Self> {
        let mut stage_val = [0.0; STAGES];
        let mut grow_val = [0.0; STAGES];
        let mut adj_pt = [0.0; STAGES];
        for i in 0..STAGES {
            stage_val[i] = row.get_float(&format!("stageMaxVal{}", i))?;
            grow_val[i] = row.get_float(&format!("stageMaxGrowVal{}", i))?;
            adj_pt[i] = row.get_float(&format!("adjPt_maxGrowVal{}", i))?;
        }

        let values = (0..CORRECTION_GRAPH_LEN)
            .map(|level| {
                let x = level as f64;
                growth_at(x, &stage_val, &grow_val, &adj_pt) / 100.0
            })
            .collect();

        Self::new(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Ratio at an attribute level (0..=150)
    pub fn at(&self, level: usize) -> Option<f64> {
        self.0.get(level).copied()
    }
}

impl TryFrom<Vec<f64>> for CorrectionGraph {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl From<CorrectionGraph> for Vec<f64> {
    fn from(graph: CorrectionGraph) -> Self {
        graph.0
    }
}

fn growth_at(x: f64, stage_val: &[f64; STAGES], grow_val: &[f64; STAGES], adj_pt: &[f64; STAGES]) -> f64 {
    if x <= stage_val[0] {
        return grow_val[0];
    }

    for i in 0..STAGES - 1 {
        let (lo, hi) = (stage_val[i], stage_val[i + 1]);
        if x > hi || hi <= lo {
            continue;
        }

        let mut ratio = (x - lo) / (hi - lo);
        let exponent = adj_pt[i];
        if exponent > 0.0 {
            ratio = ratio.powf(exponent);
        } else if exponent < 0.0 {
            ratio = 1.0 - (1.0 - ratio).powf(-exponent);
        }

        return grow_val[i] + (grow_val[i + 1] - grow_val[i]) * ratio;
    }

    grow_val[STAGES - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ItemIdFlag;

    fn calc_correct_row(adj: f64) -> ParamRow {
        let stages = [(1.0, 0.0), (18.0, 25.0), (60.0, 75.0), (80.0, 90.0), (150.0, 110.0)];
        let mut row = ParamRow::new(0, "Standard", ItemIdFlag::NonEquippable);
        for (i, (stage, grow)) in stages.iter().enumerate() {
            row.insert(format!("stageMaxVal{}", i), stage);
            row.insert(format!("stageMaxGrowVal{}", i), grow);
            row.insert(format!("adjPt_maxGrowVal{}", i), adj);
        }
        row
    }

    #[test]
    fn test_exact_length_validates() {
        assert!(CorrectionGraph::new(vec![0.0; 151]).is_ok());
    }

    #[test]
    fn test_wrong_length_fails() {
        assert!(matches!(
            CorrectionGraph::new(vec![0.0; 150]),
            Err(Error::SchemaViolation(_))
        ));
        assert!(matches!(
            CorrectionGraph::new(vec![0.0; 152]),
            Err(Error::SchemaViolation(_))
        ));
    }

    #[test]
    fn test_negative_entry_fails() {
        let mut values = vec![0.5; 151];
        values[42] = -0.01;
        let err = CorrectionGraph::new(values).unwrap_err();
        assert!(err.to_string().contains("level 42"));
    }

    #[test]
    fn test_nan_entry_fails() {
        let mut values = vec![0.5; 151];
        values[0] = f64::NAN;
        let err = CorrectionGraph::new(values).unwrap_err();
        assert!(err.to_string().contains("level 0 is not a non-negative number: NaN"));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: std::result::Result<CorrectionGraph, _> =
            serde_json::from_str(&serde_json::to_string(&vec![1.0; 151]).unwrap());
        assert!(ok.is_ok());

        let short: std::result::Result<CorrectionGraph, _> = serde_json::from_str("[1.0, 2.0]");
        assert!(short.is_err());
    }

    #[test]
    fn test_linear_curve_points() {
        let graph = CorrectionGraph::from_calc_correct(&calc_correct_row(1.0)).unwrap();
        assert_eq!(graph.values().len(), 151);
        assert_eq!(graph.at(0), Some(0.0));
        assert_eq!(graph.at(1), Some(0.0));
        assert!((graph.at(18).unwrap() - 0.25).abs() < 1e-9);
        assert!((graph.at(60).unwrap() - 0.75).abs() < 1e-9);
        assert!((graph.at(150).unwrap() - 1.10).abs() < 1e-9);
        assert_eq!(graph.at(151), None);
    }

    #[test]
    fn test_curve_is_monotonic() {
        for adj in [1.0, 1.2, -1.2] {
            let graph = CorrectionGraph::from_calc_correct(&calc_correct_row(adj)).unwrap();
            assert!(graph.values().windows(2).all(|w| w[0] <= w[1] + 1e-12));
        }
    }

    #[test]
    fn test_exponent_bends_curve() {
        let linear = CorrectionGraph::from_calc_correct(&calc_correct_row(1.0)).unwrap();
        let late = CorrectionGraph::from_calc_correct(&calc_correct_row(2.0)).unwrap();
        let early = CorrectionGraph::from_calc_correct(&calc_correct_row(-2.0)).unwrap();

        let mid = 40;
        assert!(late.at(mid).unwrap() < linear.at(mid).unwrap());
        assert!(early.at(mid).unwrap() > linear.at(mid).unwrap());
    }

    #[test]
    fn test_missing_stage_field() {
        let row = ParamRow::new(3, "", ItemIdFlag::NonEquippable);
        assert!(matches!(
            CorrectionGraph::from_calc_correct(&row),
            Err(Error::MissingField { row: 3, .. })
        ));
    }
}
