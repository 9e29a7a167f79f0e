use serde::{Deserialize, Serialize};

/// Planned vs. actual duration and budget vs. spend for one project phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPhase {
    pub phase: String,
    pub planned_days: f64,
    pub actual_days: f64,
    pub budget: f64,
    pub spent: f64,
}

impl ProjectPhase {
    pub fn new(
        phase: impl Into<String>,
        planned_days: f64,
        actual_days: f64,
        budget: f64,
        spent: f64,
    ) -> Self {
        Self {
            phase: phase.into(),
            planned_days,
            actual_days,
            budget,
            spent,
        }
    }
}
