//! One analysis run: the project, its variable catalog and the session.

use costlens_core::model::SavedAnalysis;
use costlens_core::phases::PhaseView;
use costlens_core::{
    AnalysisCatalog, InputProvider, Notifier, SensitivitySession, SessionError, TornadoChart,
    available_variables, build_tornado,
};
use jiff::Timestamp;

use crate::project::ProjectFile;

/// What the user asked for on the command line
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub metric: Option<String>,
    /// Variable ids to select
    pub select: Vec<String>,
    pub base_value: Option<f64>,
    pub save: bool,
    pub reset: bool,
    pub view: PhaseView,
}

#[derive(Debug)]
pub struct AnalysisRun {
    pub project: ProjectFile,
    pub catalog: AnalysisCatalog,
    pub session: SensitivitySession,
}

impl AnalysisRun {
    pub fn new(project: ProjectFile, now: Timestamp) -> Self {
        let catalog = build_catalog(&project, now);
        let session = SensitivitySession::new(&project.settings);
        tracing::info!(
            variables = catalog.len(),
            lcoe = catalog.metrics.lcoe,
            lcoh = catalog.metrics.lcoh,
            "Built analysis catalog"
        );
        Self {
            project,
            catalog,
            session,
        }
    }

    /// Rebuild the catalog after the inputs changed. The selection is
    /// re-resolved against the new catalog so it carries fresh values.
    pub fn refresh(&mut self, now: Timestamp) {
        self.catalog = build_catalog(&self.project, now);
        let ids: Vec<String> = self
            .session
            .selected_variables()
            .iter()
            .map(|v| v.id.to_string())
            .collect();
        self.session
            .select_variables(self.catalog.select(ids.iter().map(String::as_str)));
    }

    /// Apply a request in event order: metric, selection, base value
    /// override, then save or reset.
    pub fn apply(
        &mut self,
        request: &AnalysisRequest,
        notifier: &mut dyn Notifier,
        now: Timestamp,
    ) -> Result<Option<SavedAnalysis>, SessionError> {
        if let Some(metric) = &request.metric {
            self.session
                .select_metric(metric, &self.project, &self.catalog.metrics, now);
            tracing::info!(
                metric = metric.as_str(),
                base_value = self.session.base_value(),
                "Metric selected"
            );
        }

        if !request.select.is_empty() {
            let variables = self
                .catalog
                .select(request.select.iter().map(String::as_str));
            for id in &request.select {
                if !variables.iter().any(|v| v.id.as_str() == id) {
                    tracing::warn!(id = id.as_str(), "Unknown variable id ignored");
                }
            }
            tracing::debug!(count = variables.len(), "Variables selected");
            self.session.select_variables(variables);
        }

        if let Some(value) = request.base_value {
            self.session.set_base_value(value);
        }

        let saved = if request.save {
            Some(self.session.save_analysis(notifier, now)?.clone())
        } else {
            None
        };

        if request.reset {
            self.session.reset_analysis(notifier);
        }

        Ok(saved)
    }

    pub fn tornado(&self) -> TornadoChart {
        build_tornado(
            self.session.current_metric(),
            self.session.base_value(),
            self.session.selected_variables(),
        )
    }
}

fn build_catalog(project: &ProjectFile, now: Timestamp) -> AnalysisCatalog {
    let catalog = available_variables(project.inputs(), now);
    for id in &catalog.shadowed {
        tracing::warn!(
            id = id.as_str(),
            "Input id collides with a derived metric and was left out"
        );
    }
    catalog
}
