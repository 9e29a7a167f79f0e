//! Chart-ready tornado data for a set of selected variables.
//!
//! Each bar assumes unit elasticity between a variable and the output
//! metric: moving the variable by `x %` moves the metric by `x %`. Bars are
//! ranked by the width of the resulting outcome band.

use serde::{Deserialize, Serialize};

use crate::model::{AnalysisVariable, InputId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TornadoBar {
    pub variable_id: InputId,
    pub name: String,
    pub unit: String,
    pub variable_low: f64,
    pub variable_high: f64,
    /// Metric value with the variable at its low bound
    pub outcome_low: f64,
    /// Metric value with the variable at its high bound
    pub outcome_high: f64,
}

impl TornadoBar {
    pub fn spread(&self) -> f64 {
        (self.outcome_high - self.outcome_low).abs()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TornadoChart {
    pub metric: String,
    pub base_value: f64,
    /// Sorted by spread, widest first
    pub bars: Vec<TornadoBar>,
}

/// Headline numbers shown next to the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TornadoSummary {
    pub metric: String,
    pub base_value: f64,
    pub variable_count: usize,
    pub top_driver: Option<String>,
    pub top_spread: f64,
    pub min_outcome: f64,
    pub max_outcome: f64,
}

pub fn build_tornado(metric: &str, base_value: f64, variables: &[AnalysisVariable]) -> TornadoChart {
    let mut bars: Vec<TornadoBar> = variables
        .iter()
        .map(|v| TornadoBar {
            variable_id: v.id.clone(),
            name: v.name.clone(),
            unit: v.unit.clone(),
            variable_low: v.range.low,
            variable_high: v.range.high,
            outcome_low: base_value * (1.0 + v.range.low_pct),
            outcome_high: base_value * (1.0 + v.range.high_pct),
        })
        .collect();

    bars.sort_by(|a, b| {
        b.spread()
            .total_cmp(&a.spread())
            .then_with(|| a.variable_id.cmp(&b.variable_id))
    });

    TornadoChart {
        metric: metric.to_string(),
        base_value,
        bars,
    }
}

impl TornadoChart {
    pub fn summary(&self) -> TornadoSummary {
        let top = self.bars.first();
        let (min_outcome, max_outcome) = self.bars.iter().fold(
            (self.base_value, self.base_value),
            |(lo, hi), bar| {
                (
                    lo.min(bar.outcome_low).min(bar.outcome_high),
                    hi.max(bar.outcome_low).max(bar.outcome_high),
                )
            },
        );

        TornadoSummary {
            metric: self.metric.clone(),
            base_value: self.base_value,
            variable_count: self.bars.len(),
            top_driver: top.map(|b| b.name.clone()),
            top_spread: top.map_or(0.0, TornadoBar::spread),
            min_outcome,
            max_outcome,
        }
    }
}
