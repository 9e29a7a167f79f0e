use serde::{Deserialize, Serialize};

/// A named output of the financial model (NPV, IRR, DSCR, ...) and its live value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputMetric {
    pub name: String,
    pub value: f64,
}

impl OutputMetric {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
