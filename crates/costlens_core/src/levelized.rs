//! Levelized cost metrics (LCOE / LCOH) derived from project inputs.
//!
//! Both metrics divide the discounted lifetime cost of the project by its
//! discounted lifetime output. Only inputs whose `category_id` is one of the
//! recognized [`CostCategory`] values take part; everything else is ignored
//! here (it still becomes an analysis variable on its own).
//!
//! | category_id     | meaning                                  |
//! |-----------------|------------------------------------------|
//! | `capex`         | up-front capital cost, $ (year 0)        |
//! | `opex`          | fixed annual operating cost, $/yr        |
//! | `fuel`          | annual fuel or feedstock cost, $/yr      |
//! | `costs`         | generic cost line, split by expense type |
//! | `production`    | annual electricity output, MWh/yr        |
//! | `hydrogen`      | annual hydrogen output, kg/yr            |
//! | `discount_rate` | discount rate, percent                   |
//! | `project_life`  | economic life, years                     |
//! | `degradation`   | annual output degradation, percent       |
//!
//! Missing data never fails: absent parameters take the documented defaults
//! and a project with no output has a levelized cost of zero.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::model::{DataType, ExpenseType, InputId, ProjectInput};

/// Discount rate used when no `discount_rate` input exists (percent)
pub const DEFAULT_DISCOUNT_RATE_PCT: f64 = 8.0;
/// Project life used when no `project_life` input exists (years)
pub const DEFAULT_PROJECT_LIFE_YEARS: u32 = 25;
/// Annual degradation used when no `degradation` input exists (percent)
pub const DEFAULT_DEGRADATION_PCT: f64 = 0.0;

pub const MAX_PROJECT_LIFE_YEARS: u32 = 100;

pub const LCOE_ID: &str = "derived-lcoe";
pub const LCOH_ID: &str = "derived-lcoh";

/// Input categories understood by the levelized cost calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Capex,
    Opex,
    Fuel,
    Costs,
    Production,
    Hydrogen,
    DiscountRate,
    ProjectLife,
    Degradation,
}

impl CostCategory {
    pub const ALL: [CostCategory; 9] = [
        Self::Capex,
        Self::Opex,
        Self::Fuel,
        Self::Costs,
        Self::Production,
        Self::Hydrogen,
        Self::DiscountRate,
        Self::ProjectLife,
        Self::Degradation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Capex => "capex",
            Self::Opex => "opex",
            Self::Fuel => "fuel",
            Self::Costs => "costs",
            Self::Production => "production",
            Self::Hydrogen => "hydrogen",
            Self::DiscountRate => "discount_rate",
            Self::ProjectLife => "project_life",
            Self::Degradation => "degradation",
        }
    }

    /// Match a (normalized) category id
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == key)
    }

    pub fn of(input: &ProjectInput) -> Option<Self> {
        Self::from_key(&input.category_key())
    }
}

/// Which output quantity the cost is levelized over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelizedOutput {
    /// Electricity, MWh -> $/MWh
    Energy,
    /// Hydrogen, kg -> $/kg
    Hydrogen,
}

/// Cost and output figures aggregated from a set of inputs
#[derive(Debug, Clone, PartialEq)]
pub struct CostBasis {
    pub capital_cost: f64,
    pub annual_cost: f64,
    pub annual_energy_mwh: f64,
    pub annual_hydrogen_kg: f64,
    pub discount_rate: f64,
    pub project_life_years: u32,
    pub degradation: f64,
}

impl Default for CostBasis {
    fn default() -> Self {
        Self {
            capital_cost: 0.0,
            annual_cost: 0.0,
            annual_energy_mwh: 0.0,
            annual_hydrogen_kg: 0.0,
            discount_rate: DEFAULT_DISCOUNT_RATE_PCT / 100.0,
            project_life_years: DEFAULT_PROJECT_LIFE_YEARS,
            degradation: DEFAULT_DEGRADATION_PCT / 100.0,
        }
    }
}

impl CostBasis {
    /// Aggregate the recognized inputs.
    ///
    /// Derived records and non-finite values are skipped. Costs and output
    /// quantities are summed with negatives clamped to zero; rate and life
    /// parameters take the last occurrence.
    pub fn from_inputs(inputs: &[ProjectInput]) -> Self {
        let mut basis = Self::default();

        for input in inputs {
            if input.id.is_derived() || !input.value.is_finite() {
                continue;
            }
            let Some(category) = CostCategory::of(input) else {
                continue;
            };
            let amount = input.value.max(0.0);

            match category {
                CostCategory::Capex => basis.capital_cost += amount,
                CostCategory::Opex | CostCategory::Fuel => basis.annual_cost += amount,
                CostCategory::Costs => match input.expense_type {
                    ExpenseType::Capex => basis.capital_cost += amount,
                    ExpenseType::Opex => basis.annual_cost += amount,
                    _ => {}
                },
                CostCategory::Production => basis.annual_energy_mwh += amount,
                CostCategory::Hydrogen => basis.annual_hydrogen_kg += amount,
                CostCategory::DiscountRate => {
                    basis.discount_rate = input.value.clamp(0.0, 100.0) / 100.0;
                }
                CostCategory::ProjectLife => {
                    basis.project_life_years =
                        (input.value.round().max(1.0) as u32).min(MAX_PROJECT_LIFE_YEARS);
                }
                CostCategory::Degradation => {
                    basis.degradation = input.value.clamp(0.0, 100.0) / 100.0;
                }
            }
        }

        basis
    }

    /// Present value of all costs over the project life
    pub fn discounted_cost(&self) -> f64 {
        let annual: f64 = (1..=self.project_life_years)
            .map(|t| self.annual_cost / self.discount_factor(t))
            .sum();
        self.capital_cost + annual
    }

    /// Present value of the output quantity over the project life
    pub fn discounted_output(&self, output: LevelizedOutput) -> f64 {
        let annual = match output {
            LevelizedOutput::Energy => self.annual_energy_mwh,
            LevelizedOutput::Hydrogen => self.annual_hydrogen_kg,
        };
        (1..=self.project_life_years)
            .map(|t| annual * (1.0 - self.degradation).powi(t as i32 - 1) / self.discount_factor(t))
            .sum()
    }

    /// Levelized cost over the given output; 0 when there is no output
    pub fn levelized_cost(&self, output: LevelizedOutput) -> f64 {
        let quantity = self.discounted_output(output);
        if quantity <= 0.0 {
            return 0.0;
        }
        let lcox = self.discounted_cost() / quantity;
        if lcox.is_finite() { lcox.max(0.0) } else { 0.0 }
    }

    fn discount_factor(&self, year: u32) -> f64 {
        (1.0 + self.discount_rate).powi(year as i32)
    }
}

/// Levelized cost of energy in $/MWh
pub fn calculate_lcoe(inputs: &[ProjectInput]) -> f64 {
    CostBasis::from_inputs(inputs).levelized_cost(LevelizedOutput::Energy)
}

/// Levelized cost of hydrogen in $/kg
pub fn calculate_lcoh(inputs: &[ProjectInput]) -> f64 {
    CostBasis::from_inputs(inputs).levelized_cost(LevelizedOutput::Hydrogen)
}

/// Both levelized metrics computed from the same input set
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub lcoe: f64,
    pub lcoh: f64,
}

impl DerivedMetrics {
    pub fn from_inputs(inputs: &[ProjectInput]) -> Self {
        let basis = CostBasis::from_inputs(inputs);
        Self {
            lcoe: basis.levelized_cost(LevelizedOutput::Energy),
            lcoh: basis.levelized_cost(LevelizedOutput::Hydrogen),
        }
    }

    /// Synthetic input records carrying the metrics, so they can flow
    /// through the same transformation path as raw inputs
    pub fn to_inputs(&self, now: Timestamp) -> Vec<ProjectInput> {
        vec![
            derived_record(
                LCOE_ID,
                "Levelized Cost of Energy (LCOE)",
                "Calculated LCOE based on project inputs",
                "$/MWh",
                self.lcoe,
                now,
            ),
            derived_record(
                LCOH_ID,
                "Levelized Cost of Hydrogen (LCOH)",
                "Calculated LCOH based on project inputs",
                "$/kg",
                self.lcoh,
                now,
            ),
        ]
    }
}

/// Compute LCOE/LCOH and wrap them as derived input records
pub fn derived_metric_inputs(inputs: &[ProjectInput], now: Timestamp) -> Vec<ProjectInput> {
    DerivedMetrics::from_inputs(inputs).to_inputs(now)
}

fn derived_record(
    id: &str,
    name: &str,
    description: &str,
    unit: &str,
    value: f64,
    now: Timestamp,
) -> ProjectInput {
    ProjectInput {
        id: InputId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        category_id: CostCategory::Production.as_str().to_string(),
        unit: unit.to_string(),
        data_type: DataType::Constant,
        expense_type: ExpenseType::Unspecified,
        value,
        created_at: now,
        updated_at: now,
    }
}
