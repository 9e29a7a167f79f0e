mod ids;
mod inputs;
mod outputs;
mod phases;
mod variables;

pub use ids::{AnalysisId, DERIVED_PREFIX, InputId};
pub use inputs::{DataType, ExpenseType, ProjectInput};
pub use outputs::OutputMetric;
pub use phases::ProjectPhase;
pub use variables::{AnalysisVariable, PerturbationRange, SavedAnalysis};
