//! Project files: the inputs, outputs and phases of one model, stored as YAML.
//!
//! ```yaml
//! settings:
//!   default_metric: NPV
//! inputs:
//!   - id: capex
//!     name: Capital cost
//!     category_id: capex
//!     unit: $
//!     value: 120000000
//! outputs:
//!   - name: NPV
//!     value: 2000000
//! ```

use std::fs;
use std::path::Path;

use costlens_core::model::{DataType, ExpenseType, OutputMetric, ProjectInput, ProjectPhase};
use costlens_core::phases::sample_phases;
use costlens_core::{InputProvider, OutputProvider, SessionConfig};
use serde::{Deserialize, Serialize};

/// Error types for project file operations
#[derive(Debug)]
pub enum ProjectFileError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for ProjectFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectFileError::Io(msg) => write!(f, "IO error: {}", msg),
            ProjectFileError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ProjectFileError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ProjectFileError {}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectFile {
    #[serde(default)]
    pub settings: SessionConfig,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<ProjectInput>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<OutputMetric>,

    /// Timeline/budget data; the sample phases are shown when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phases: Vec<ProjectPhase>,
}

impl ProjectFile {
    pub fn from_yaml(yaml: &str) -> Result<Self, ProjectFileError> {
        serde_saphyr::from_str(yaml).map_err(|e| ProjectFileError::Parse(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, ProjectFileError> {
        serde_saphyr::to_string(self).map_err(|e| ProjectFileError::Serialize(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ProjectFileError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ProjectFileError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let project = Self::from_yaml(&content)?;
        tracing::debug!(
            path = %path.display(),
            inputs = project.inputs.len(),
            outputs = project.outputs.len(),
            "Loaded project file"
        );
        Ok(project)
    }

    pub fn save(&self, path: &Path) -> Result<(), ProjectFileError> {
        let yaml = self.to_yaml()?;
        fs::write(path, yaml).map_err(|e| {
            ProjectFileError::Io(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    /// Phases to display: the project's own or the sample set
    pub fn phases_or_sample(&self) -> Vec<ProjectPhase> {
        if self.phases.is_empty() {
            sample_phases()
        } else {
            self.phases.clone()
        }
    }

    /// A small wind-plus-electrolyser project used when no file is given
    pub fn sample() -> Self {
        let inputs = vec![
            ProjectInput::new("capex-plant", "Plant capital cost", "capex", 120_000_000.0)
                .with_unit("$")
                .with_expense_type(ExpenseType::Capex),
            ProjectInput::new("opex-fixed", "Fixed O&M", "opex", 2_400_000.0)
                .with_unit("$/yr")
                .with_expense_type(ExpenseType::Opex),
            ProjectInput::new("fuel-water", "Water and consumables", "fuel", 350_000.0)
                .with_unit("$/yr")
                .with_data_type(DataType::TimeSeries),
            ProjectInput::new("production-power", "Net electricity output", "production", 260_000.0)
                .with_unit("MWh/yr"),
            ProjectInput::new("production-h2", "Hydrogen output", "hydrogen", 3_200_000.0)
                .with_unit("kg/yr"),
            ProjectInput::new("discount-rate", "Discount rate", "discount_rate", 8.0).with_unit("%"),
            ProjectInput::new("project-life", "Project life", "project_life", 25.0)
                .with_unit("years"),
            ProjectInput::new("degradation", "Output degradation", "degradation", 0.5)
                .with_unit("%/yr"),
            ProjectInput::new("ppa-price", "PPA price", "price", 62.0).with_unit("$/MWh"),
        ];
        let outputs = vec![
            OutputMetric::new("NPV", 18_500_000.0),
            OutputMetric::new("IRR", 9.4),
            OutputMetric::new("DSCR", 1.35),
        ];

        Self {
            settings: SessionConfig::default(),
            inputs,
            outputs,
            phases: Vec::new(),
        }
    }
}

impl InputProvider for ProjectFile {
    fn inputs(&self) -> &[ProjectInput] {
        &self.inputs
    }
}

impl OutputProvider for ProjectFile {
    fn all_outputs(&self) -> &[OutputMetric] {
        &self.outputs
    }
}
