//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use costlens_core::phases::PhaseView;

use crate::app::AnalysisRequest;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ViewArg {
    Timeline,
    Budget,
}

impl From<ViewArg> for PhaseView {
    fn from(v: ViewArg) -> Self {
        match v {
            ViewArg::Timeline => PhaseView::Timeline,
            ViewArg::Budget => PhaseView::Budget,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "costlens")]
#[command(about = "Levelized cost and sensitivity analysis for project models")]
pub struct Args {
    /// Project YAML file (a built-in sample project is used when omitted)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Output metric to analyse (NPV, IRR, LCOE, ...)
    #[arg(short, long)]
    pub metric: Option<String>,

    /// Variable ids to include, comma separated
    #[arg(short, long, value_delimiter = ',')]
    pub select: Vec<String>,

    /// Override the metric's base value
    #[arg(short, long)]
    pub base_value: Option<f64>,

    /// Save the analysis after applying the selection
    #[arg(long)]
    pub save: bool,

    /// Clear the selection afterwards; saved analyses are kept
    #[arg(long)]
    pub reset: bool,

    /// Print saved analyses as YAML
    #[arg(long, requires = "save")]
    pub export: bool,

    /// Project phase chart to show
    #[arg(long, value_enum, default_value = "timeline")]
    pub view: ViewArg,

    /// Path to the data directory (default: ~/.costlens/)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The session events this invocation asks for
    pub fn request(&self) -> AnalysisRequest {
        AnalysisRequest {
            metric: self.metric.clone(),
            select: self.select.clone(),
            base_value: self.base_value,
            save: self.save,
            reset: self.reset,
            view: self.view.into(),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".costlens")
}
