//! Mapping from project inputs to sensitivity-analysis variables.
//!
//! Every input gets a perturbation range from a fixed policy keyed by its
//! category, widened for time-series inputs. Unknown categories fall back to
//! a symmetric 10 % swing, so the mapping is total.

use jiff::Timestamp;
use rustc_hash::FxHashMap;

use crate::levelized::DerivedMetrics;
use crate::model::{AnalysisVariable, DataType, InputId, PerturbationRange, ProjectInput};

/// How far a variable is pushed down and up from its base value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Swing {
    /// Fractions of the base value, e.g. `down: 0.1, up: 0.3`
    Relative { down: f64, up: f64 },
    /// Absolute offsets in the input's own unit, with a lower floor
    Absolute { down: f64, up: f64, floor: f64 },
}

pub const DEFAULT_SWING: Swing = Swing::Relative {
    down: 0.10,
    up: 0.10,
};

/// Widening applied to time-series inputs
pub const TIME_SERIES_MULTIPLIER: f64 = 1.5;

impl Swing {
    /// Policy swing for a normalized category key
    pub fn for_category(key: &str) -> Self {
        match key {
            "capex" => Self::Relative {
                down: 0.10,
                up: 0.30,
            },
            "opex" | "costs" => Self::Relative {
                down: 0.15,
                up: 0.15,
            },
            "fuel" => Self::Relative {
                down: 0.25,
                up: 0.25,
            },
            "production" | "hydrogen" => Self::Relative {
                down: 0.20,
                up: 0.10,
            },
            "revenue" | "price" => Self::Relative {
                down: 0.20,
                up: 0.20,
            },
            "discount_rate" => Self::Absolute {
                down: 2.0,
                up: 2.0,
                floor: 0.0,
            },
            "project_life" => Self::Absolute {
                down: 5.0,
                up: 5.0,
                floor: 1.0,
            },
            "degradation" => Self::Absolute {
                down: 0.5,
                up: 0.5,
                floor: 0.0,
            },
            _ => DEFAULT_SWING,
        }
    }

    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        match self {
            Self::Relative { down, up } => Self::Relative {
                down: down * factor,
                up: up * factor,
            },
            Self::Absolute { down, up, floor } => Self::Absolute {
                down: down * factor,
                up: up * factor,
                floor,
            },
        }
    }

    /// Apply the swing around `base`
    pub fn range(self, base: f64) -> PerturbationRange {
        match self {
            // magnitude-based so a negative base still moves down then up
            Self::Relative { down, up } => {
                let mag = base.abs();
                PerturbationRange::from_bounds(base, base - mag * down, base + mag * up)
            }
            Self::Absolute { down, up, floor } => {
                let low = (base - down).max(floor.min(base));
                PerturbationRange::from_bounds(base, low, base + up)
            }
        }
    }
}

fn data_type_multiplier(data_type: &DataType) -> f64 {
    match data_type {
        DataType::TimeSeries => TIME_SERIES_MULTIPLIER,
        _ => 1.0,
    }
}

/// Convert one input (or derived metric record) into an analysis variable.
///
/// The variable keeps the input's id. Non-finite values are treated as 0.
pub fn transform_input_to_analysis_variable(input: &ProjectInput) -> AnalysisVariable {
    let base = if input.value.is_finite() {
        input.value
    } else {
        0.0
    };
    let swing = Swing::for_category(&input.category_key())
        .scaled(data_type_multiplier(&input.data_type));

    AnalysisVariable {
        id: input.id.clone(),
        name: input.name.clone(),
        description: input.description.clone(),
        unit: input.unit.clone(),
        category_id: input.category_id.clone(),
        base_value: base,
        range: swing.range(base),
    }
}

/// The variables offered for selection: raw inputs followed by derived metrics
#[derive(Debug, Clone, Default)]
pub struct AnalysisCatalog {
    pub metrics: DerivedMetrics,
    pub variables: Vec<AnalysisVariable>,
    /// Raw inputs dropped because their id is reserved for a derived metric
    pub shadowed: Vec<InputId>,
    index: FxHashMap<InputId, usize>,
}

impl AnalysisCatalog {
    /// Compute derived metrics, merge them after the inputs and transform all.
    ///
    /// Raw inputs carrying a `derived-` id are left out so every variable id
    /// has exactly one source; they are listed in `shadowed`.
    pub fn build(inputs: &[ProjectInput], now: Timestamp) -> Self {
        let metrics = DerivedMetrics::from_inputs(inputs);
        let derived = metrics.to_inputs(now);

        let (reserved, raw): (Vec<&ProjectInput>, Vec<&ProjectInput>) =
            inputs.iter().partition(|input| input.id.is_derived());
        let shadowed = reserved.into_iter().map(|input| input.id.clone()).collect();

        let variables: Vec<AnalysisVariable> = raw
            .into_iter()
            .chain(derived.iter())
            .map(transform_input_to_analysis_variable)
            .collect();

        // first occurrence wins when the input manager hands out duplicate ids
        let mut index = FxHashMap::default();
        for (i, v) in variables.iter().enumerate() {
            index.entry(v.id.clone()).or_insert(i);
        }

        Self {
            metrics,
            variables,
            shadowed,
            index,
        }
    }

    pub fn get(&self, id: &InputId) -> Option<&AnalysisVariable> {
        self.index.get(id).map(|&i| &self.variables[i])
    }

    /// Resolve a list of ids, skipping unknown ones
    pub fn select<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Vec<AnalysisVariable> {
        ids.into_iter()
            .filter_map(|id| self.get(&InputId::new(id)).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// Shorthand for [`AnalysisCatalog::build`]
pub fn available_variables(inputs: &[ProjectInput], now: Timestamp) -> AnalysisCatalog {
    AnalysisCatalog::build(inputs, now)
}
