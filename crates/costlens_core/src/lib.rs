//! Levelized-cost and sensitivity analysis core
//!
//! This crate computes the numbers behind a project-analytics dashboard:
//! - Levelized cost of energy and hydrogen (LCOE / LCOH) from project inputs
//! - Analysis variables with low/high perturbation ranges for tornado charts
//! - A sensitivity session tracking selection, active metric and saved analyses
//! - Schedule and budget variance per project phase
//!
//! Everything here is pure and synchronous; rendering and notifications are
//! left to the host through the traits in [`providers`].
//!
//! ```ignore
//! use costlens_core::{AnalysisCatalog, SensitivitySession, RecordingNotifier};
//!
//! let now = jiff::Timestamp::now();
//! let catalog = AnalysisCatalog::build(&inputs, now);
//! let mut session = SensitivitySession::default();
//! session.select_variables(catalog.select(["capex", "derived-lcoe"]));
//! session.select_metric("NPV", &outputs, &catalog.metrics, now);
//! session.save_analysis(&mut RecordingNotifier::new(), now)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod fallback;
pub mod levelized;
pub mod phases;
pub mod providers;
pub mod session;
pub mod timer;
pub mod tornado;
pub mod transform;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::SessionError;
pub use levelized::{DerivedMetrics, calculate_lcoe, calculate_lcoh, derived_metric_inputs};
pub use providers::{
    InputProvider, Notification, NotificationVariant, Notifier, OutputProvider, RecordingNotifier,
};
pub use session::{SensitivitySession, SessionConfig, SessionState};
pub use tornado::{TornadoChart, build_tornado};
pub use transform::{AnalysisCatalog, available_variables, transform_input_to_analysis_variable};
