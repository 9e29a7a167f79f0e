//! Command-line host for the costlens analysis core
//!
//! Loads a YAML project file, builds the analysis variable catalog,
//! drives a sensitivity session from command-line choices and renders a
//! plain-text report (derived metrics, variables, tornado, phases).

pub mod app;
pub mod cli;
pub mod logging;
pub mod notify;
pub mod project;
pub mod report;

#[cfg(test)]
mod tests;

pub use app::{AnalysisRequest, AnalysisRun};
pub use logging::init_logging;
pub use notify::ConsoleNotifier;
pub use project::{ProjectFile, ProjectFileError};
