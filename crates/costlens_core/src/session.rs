//! Sensitivity analysis session: selection, active metric, saved analyses.
//!
//! The session holds only UI-facing state. All financial computation lives
//! in [`crate::levelized`] and [`crate::transform`]; the session receives
//! their results by reference.

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::fallback::fallback_base_value;
use crate::levelized::DerivedMetrics;
use crate::model::{AnalysisId, AnalysisVariable, SavedAnalysis};
use crate::providers::{Notification, Notifier, OutputProvider};
use crate::timer::{LoadingTimer, TimerToken};

/// Session defaults, usually read from the project file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_metric")]
    pub default_metric: String,

    #[serde(default = "default_base_value")]
    pub default_base_value: f64,

    /// Length of the loading state after a metric change
    #[serde(default = "default_loading_delay_ms")]
    pub loading_delay_ms: u64,
}

fn default_metric() -> String {
    "NPV".to_string()
}

fn default_base_value() -> f64 {
    1_000_000.0
}

fn default_loading_delay_ms() -> u64 {
    800
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_metric: default_metric(),
            default_base_value: default_base_value(),
            loading_delay_ms: default_loading_delay_ms(),
        }
    }
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    NoSelection,
    VariablesChosen,
    MetricChosen,
    Saved,
    Reset,
}

/// Hands out `analysis-<millis>` ids that strictly increase within a session
/// even when the wall clock stalls or steps back.
#[derive(Debug, Clone, Default)]
pub struct AnalysisIdGenerator {
    last: Option<i64>,
}

impl AnalysisIdGenerator {
    pub fn next(&mut self, now: Timestamp) -> AnalysisId {
        let millis = now.as_millisecond();
        let token = match self.last {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last = Some(token);
        AnalysisId(format!("analysis-{token}"))
    }
}

#[derive(Debug, Clone)]
pub struct SensitivitySession {
    selected: Vec<AnalysisVariable>,
    current_metric: String,
    base_value: f64,
    saved: Vec<SavedAnalysis>,
    loading: LoadingTimer,
    state: SessionState,
    ids: AnalysisIdGenerator,
}

impl Default for SensitivitySession {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl SensitivitySession {
    pub fn new(config: &SessionConfig) -> Self {
        let delay_ms = i64::try_from(config.loading_delay_ms).unwrap_or(i64::MAX);
        Self {
            selected: Vec::new(),
            current_metric: config.default_metric.clone(),
            base_value: config.default_base_value,
            saved: Vec::new(),
            loading: LoadingTimer::new(SignedDuration::from_millis(delay_ms)),
            state: SessionState::NoSelection,
            ids: AnalysisIdGenerator::default(),
        }
    }

    pub fn selected_variables(&self) -> &[AnalysisVariable] {
        &self.selected
    }

    pub fn current_metric(&self) -> &str {
        &self.current_metric
    }

    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    pub fn saved_analyses(&self) -> &[SavedAnalysis] {
        &self.saved
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Replace the active selection
    pub fn select_variables(&mut self, variables: Vec<AnalysisVariable>) {
        self.state = if variables.is_empty() {
            SessionState::NoSelection
        } else {
            SessionState::VariablesChosen
        };
        self.selected = variables;
    }

    /// Switch the active metric and resolve its base value.
    ///
    /// A live output with this name wins; otherwise the fallback table is
    /// used, and unknown names get 0. Starts the loading timer, superseding
    /// any pending one; the returned token identifies this run.
    pub fn select_metric<O>(
        &mut self,
        name: &str,
        outputs: &O,
        derived: &DerivedMetrics,
        now: Timestamp,
    ) -> TimerToken
    where
        O: OutputProvider + ?Sized,
    {
        self.current_metric = name.to_string();
        self.base_value = match outputs.find_output(name) {
            Some(output) => output.value,
            None => fallback_base_value(name, derived),
        };
        self.state = SessionState::MetricChosen;
        self.loading.start(now)
    }

    /// Manual override of the base value
    pub fn set_base_value(&mut self, value: f64) {
        self.base_value = value;
    }

    /// Snapshot the current selection.
    ///
    /// With nothing selected this reports a destructive notification and
    /// leaves the session untouched.
    pub fn save_analysis(
        &mut self,
        notifier: &mut dyn Notifier,
        now: Timestamp,
    ) -> Result<&SavedAnalysis, SessionError> {
        if self.selected.is_empty() {
            notifier.notify(Notification::destructive(
                "No variables selected",
                "Please select at least one variable to save this analysis.",
            ));
            return Err(SessionError::EmptySelection);
        }

        let snapshot = SavedAnalysis {
            id: self.ids.next(now),
            name: format!("{} Analysis {}", self.current_metric, self.saved.len() + 1),
            metric: self.current_metric.clone(),
            variables: self.selected.clone(),
            base_value: self.base_value,
        };
        self.saved.push(snapshot);
        self.state = SessionState::Saved;

        notifier.notify(Notification::info(
            "Analysis saved",
            &format!(
                "{} analysis has been saved and can be accessed later.",
                self.current_metric
            ),
        ));

        Ok(&self.saved[self.saved.len() - 1])
    }

    /// Clear the selection; saved analyses are kept
    pub fn reset_analysis(&mut self, notifier: &mut dyn Notifier) {
        self.selected.clear();
        self.state = SessionState::Reset;
        notifier.notify(Notification::plain(
            "Analysis has been reset. You can now start a new analysis.",
        ));
    }

    pub fn is_loading(&self, now: Timestamp) -> bool {
        self.loading.is_active(now)
    }

    /// Clear an expired loading flag; true when it was cleared by this call
    pub fn poll_loading(&mut self, now: Timestamp) -> bool {
        self.loading.poll(now)
    }

    /// Completion callback for host-driven timers; stale tokens are ignored
    pub fn complete_loading(&mut self, token: TimerToken) -> bool {
        self.loading.complete(token)
    }

    pub fn cancel_loading(&mut self) {
        self.loading.cancel();
    }
}
