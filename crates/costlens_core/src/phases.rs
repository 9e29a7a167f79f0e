//! Schedule and budget variance for the project timeline/budget chart.

use serde::{Deserialize, Serialize};

use crate::model::ProjectPhase;

/// Which pair of series the timeline/budget chart shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseView {
    #[default]
    Timeline,
    Budget,
}

impl PhaseView {
    /// (planned, actual) for timeline, (budget, spent) for budget
    pub fn series(&self, phase: &ProjectPhase) -> (f64, f64) {
        match self {
            Self::Timeline => (phase.planned_days, phase.actual_days),
            Self::Budget => (phase.budget, phase.spent),
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Timeline => Self::Budget,
            Self::Budget => Self::Timeline,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Timeline => "Timeline",
            Self::Budget => "Budget",
        }
    }

    /// Axis tick text: `120d` or `$30k`
    pub fn format_tick(&self, value: f64) -> String {
        match self {
            Self::Timeline => format!("{value}d"),
            Self::Budget => format!("${}k", value / 1000.0),
        }
    }
}

impl ProjectPhase {
    /// Positive when the phase ran long
    pub fn schedule_variance_days(&self) -> f64 {
        self.actual_days - self.planned_days
    }

    /// Positive when the phase overspent
    pub fn budget_variance(&self) -> f64 {
        self.spent - self.budget
    }

    pub fn schedule_status(&self) -> String {
        let variance = self.schedule_variance_days();
        if variance > 0.0 {
            format!("{variance} days behind schedule")
        } else {
            format!("{} days ahead of schedule", variance.abs())
        }
    }

    pub fn budget_status(&self) -> String {
        let variance = self.budget_variance();
        if variance > 0.0 {
            format!("${} over budget", group_thousands(variance))
        } else {
            format!("${} under budget", group_thousands(variance.abs()))
        }
    }
}

/// Totals across all phases
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhaseSummary {
    pub planned_days: f64,
    pub actual_days: f64,
    pub budget: f64,
    pub spent: f64,
    pub phases_late: usize,
    pub phases_over_budget: usize,
}

impl PhaseSummary {
    pub fn from_phases(phases: &[ProjectPhase]) -> Self {
        phases.iter().fold(Self::default(), |mut acc, p| {
            acc.planned_days += p.planned_days;
            acc.actual_days += p.actual_days;
            acc.budget += p.budget;
            acc.spent += p.spent;
            if p.schedule_variance_days() > 0.0 {
                acc.phases_late += 1;
            }
            if p.budget_variance() > 0.0 {
                acc.phases_over_budget += 1;
            }
            acc
        })
    }

    pub fn schedule_variance_days(&self) -> f64 {
        self.actual_days - self.planned_days
    }

    pub fn budget_variance(&self) -> f64 {
        self.spent - self.budget
    }
}

/// Phase data shown when a project has none of its own
pub fn sample_phases() -> Vec<ProjectPhase> {
    vec![
        ProjectPhase::new("Planning", 100.0, 110.0, 2_000.0, 2_200.0),
        ProjectPhase::new("Design", 90.0, 100.0, 5_000.0, 5_100.0),
        ProjectPhase::new("Procurement", 120.0, 115.0, 10_000.0, 9_500.0),
        ProjectPhase::new("Construction", 300.0, 270.0, 30_000.0, 28_000.0),
        ProjectPhase::new("Commissioning", 60.0, 40.0, 3_000.0, 2_000.0),
    ]
}

/// Format a non-negative amount with `,` thousands separators and up to two
/// decimals, trailing zeros dropped
fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (digits, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    let frac = frac.trim_end_matches('0');
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::group_thousands;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(200.0), "200");
        assert_eq!(group_thousands(2_000.0), "2,000");
        assert_eq!(group_thousands(1_234_567.5), "1,234,567.5");
        assert_eq!(group_thousands(12.05), "12.05");
        assert_eq!(group_thousands(0.004), "0");
        assert_eq!(group_thousands(2e17), "200,000,000,000,000,000");
        assert_eq!(group_thousands(1e20), "100,000,000,000,000,000,000");
    }
}
