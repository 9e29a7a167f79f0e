//! Plain-text rendering of an analysis run.

use std::fmt::Write;

use costlens_core::model::SavedAnalysis;
use costlens_core::phases::{PhaseSummary, PhaseView};

use crate::app::AnalysisRun;

pub fn render(run: &AnalysisRun, view: PhaseView) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = write_report(&mut out, run, view);
    out
}

fn write_report(out: &mut String, run: &AnalysisRun, view: PhaseView) -> std::fmt::Result {
    let metrics = &run.catalog.metrics;
    writeln!(out, "Derived metrics")?;
    writeln!(out, "  LCOE  {:>12.2} $/MWh", metrics.lcoe)?;
    writeln!(out, "  LCOH  {:>12.2} $/kg", metrics.lcoh)?;
    writeln!(out)?;

    writeln!(out, "Available variables ({})", run.catalog.len())?;
    for var in &run.catalog.variables {
        writeln!(
            out,
            "  {:<20} {:<32} {:>14.2} [{:.2} .. {:.2}] {}",
            var.id, var.name, var.base_value, var.range.low, var.range.high, var.unit
        )?;
    }
    writeln!(out)?;

    let session = &run.session;
    writeln!(
        out,
        "Metric {} (base value {:.2})",
        session.current_metric(),
        session.base_value()
    )?;

    let chart = run.tornado();
    if chart.bars.is_empty() {
        writeln!(out, "  No variables selected")?;
    } else {
        for bar in &chart.bars {
            writeln!(
                out,
                "  {:<32} {:>14.2} .. {:<14.2} spread {:.2}",
                bar.name,
                bar.outcome_low,
                bar.outcome_high,
                bar.spread()
            )?;
        }
        let summary = chart.summary();
        if let Some(driver) = &summary.top_driver {
            writeln!(
                out,
                "  Most sensitive: {driver} ({:.2} swing, range {:.2} .. {:.2})",
                summary.top_spread, summary.min_outcome, summary.max_outcome
            )?;
        }
    }
    writeln!(out)?;

    write_phases(out, run, view)?;

    if !session.saved_analyses().is_empty() {
        writeln!(out)?;
        writeln!(out, "Saved analyses")?;
        for saved in session.saved_analyses() {
            write_saved(out, saved)?;
        }
    }

    Ok(())
}

fn write_phases(out: &mut String, run: &AnalysisRun, view: PhaseView) -> std::fmt::Result {
    let phases = run.project.phases_or_sample();
    writeln!(out, "Project {}", view.label().to_lowercase())?;
    for phase in &phases {
        let (planned, actual) = view.series(phase);
        let status = match view {
            PhaseView::Timeline => phase.schedule_status(),
            PhaseView::Budget => phase.budget_status(),
        };
        writeln!(
            out,
            "  {:<16} {:>10} {:>10}  {}",
            phase.phase,
            view.format_tick(planned),
            view.format_tick(actual),
            status
        )?;
    }

    let summary = PhaseSummary::from_phases(&phases);
    writeln!(
        out,
        "  {} of {} phases late, {} over budget",
        summary.phases_late,
        phases.len(),
        summary.phases_over_budget
    )
}

fn write_saved(out: &mut String, saved: &SavedAnalysis) -> std::fmt::Result {
    let ids: Vec<&str> = saved.variables.iter().map(|v| v.id.as_str()).collect();
    writeln!(
        out,
        "  {} [{}] {} = {:.2}: {}",
        saved.name,
        saved.id,
        saved.metric,
        saved.base_value,
        ids.join(", ")
    )
}

/// Saved analyses as YAML, for export
pub fn saved_to_yaml(saved: &[SavedAnalysis]) -> Result<String, crate::project::ProjectFileError> {
    serde_saphyr::to_string(&saved.to_vec())
        .map_err(|e| crate::project::ProjectFileError::Serialize(e.to_string()))
}
