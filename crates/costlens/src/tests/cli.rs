use clap::Parser;
use costlens_core::phases::PhaseView;
use costlens_core::{RecordingNotifier, SessionState};

use crate::app::AnalysisRun;
use crate::cli::Args;
use crate::project::ProjectFile;

fn now() -> jiff::Timestamp {
    jiff::Timestamp::from_second(1_700_000_000).unwrap()
}

#[test]
fn test_defaults_map_to_empty_request() {
    let args = Args::try_parse_from(["costlens"]).unwrap();
    let request = args.request();

    assert_eq!(request.metric, None);
    assert!(request.select.is_empty());
    assert!(!request.save);
    assert!(!request.reset);
    assert_eq!(request.view, PhaseView::Timeline);
    assert_eq!(args.log_level, "info");
}

#[test]
fn test_flags_map_into_request() {
    let args = Args::try_parse_from([
        "costlens",
        "--metric",
        "IRR",
        "--select",
        "capex-plant,opex-fixed",
        "--base-value",
        "11.5",
        "--save",
        "--reset",
        "--view",
        "budget",
        "--data-dir",
        "/tmp/costlens-test",
    ])
    .unwrap();
    let request = args.request();

    assert_eq!(request.metric.as_deref(), Some("IRR"));
    assert_eq!(request.select, vec!["capex-plant", "opex-fixed"]);
    assert_eq!(request.base_value, Some(11.5));
    assert!(request.save);
    assert!(request.reset);
    assert_eq!(request.view, PhaseView::Budget);
    assert_eq!(args.data_dir(), std::path::PathBuf::from("/tmp/costlens-test"));
}

#[test]
fn test_reset_flag_clears_selection_after_save() {
    let args =
        Args::try_parse_from(["costlens", "--select", "capex-plant", "--save", "--reset"]).unwrap();
    let mut run = AnalysisRun::new(ProjectFile::sample(), now());
    let mut notifier = RecordingNotifier::new();

    run.apply(&args.request(), &mut notifier, now()).unwrap();

    assert_eq!(run.session.state(), SessionState::Reset);
    assert!(run.session.selected_variables().is_empty());
    assert_eq!(run.session.saved_analyses().len(), 1);
    assert_eq!(notifier.notifications.len(), 2);
}

#[test]
fn test_export_requires_save() {
    assert!(Args::try_parse_from(["costlens", "--export"]).is_err());
}
