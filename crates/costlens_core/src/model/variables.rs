//! Sensitivity-analysis variables and saved analysis snapshots.

use serde::{Deserialize, Serialize};

use super::{AnalysisId, InputId};

/// Low/high bounds a variable is perturbed across.
///
/// `low <= high` always holds. The relative deltas are measured against the
/// base value and are zero when the base value is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerturbationRange {
    pub low: f64,
    pub high: f64,
    pub low_pct: f64,
    pub high_pct: f64,
}

impl PerturbationRange {
    /// Build a range from absolute bounds around `base`
    pub fn from_bounds(base: f64, a: f64, b: f64) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let (low_pct, high_pct) = if base == 0.0 {
            (0.0, 0.0)
        } else {
            ((low - base) / base.abs(), (high - base) / base.abs())
        };
        Self {
            low,
            high,
            low_pct,
            high_pct,
        }
    }

    /// Absolute width of the range
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// A named, unit-tagged quantity with a base value and perturbation range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisVariable {
    /// Same as the id of the source input or derived metric
    pub id: InputId,
    pub name: String,
    pub description: String,
    pub unit: String,
    pub category_id: String,
    pub base_value: f64,
    pub range: PerturbationRange,
}

/// Immutable snapshot of a sensitivity analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedAnalysis {
    pub id: AnalysisId,
    pub name: String,
    pub metric: String,
    pub variables: Vec<AnalysisVariable>,
    pub base_value: f64,
}
