//! Project input records - the line-item assumptions of a financial model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::InputId;

/// How an input's value varies over the project life.
///
/// Serialized as a snake_case string. Unrecognized strings are kept in
/// `Other` so that records written by newer input managers still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DataType {
    #[default]
    Constant,
    TimeSeries,
    Discrete,
    Percentage,
    Other(String),
}

impl DataType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Constant => "constant",
            Self::TimeSeries => "time_series",
            Self::Discrete => "discrete",
            Self::Percentage => "percentage",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for DataType {
    fn from(s: String) -> Self {
        match normalize_tag(&s).as_str() {
            "constant" => Self::Constant,
            "time_series" | "timeseries" => Self::TimeSeries,
            "discrete" => Self::Discrete,
            "percentage" | "percent" => Self::Percentage,
            _ => Self::Other(s),
        }
    }
}

impl From<DataType> for String {
    fn from(d: DataType) -> Self {
        d.as_str().to_string()
    }
}

/// Accounting treatment of an input
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExpenseType {
    Capex,
    Opex,
    Revenue,
    #[default]
    Unspecified,
    Other(String),
}

impl ExpenseType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Capex => "capex",
            Self::Opex => "opex",
            Self::Revenue => "revenue",
            Self::Unspecified => "other",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ExpenseType {
    fn from(s: String) -> Self {
        match normalize_tag(&s).as_str() {
            "capex" => Self::Capex,
            "opex" => Self::Opex,
            "revenue" => Self::Revenue,
            "other" | "" => Self::Unspecified,
            _ => Self::Other(s),
        }
    }
}

impl From<ExpenseType> for String {
    fn from(e: ExpenseType) -> Self {
        e.as_str().to_string()
    }
}

/// Lowercase a tag and fold `-` and spaces into `_`.
pub(crate) fn normalize_tag(tag: &str) -> String {
    tag.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// One assumption of the financial model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInput {
    pub id: InputId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category_id: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub data_type: DataType,
    #[serde(default)]
    pub expense_type: ExpenseType,
    pub value: f64,
    #[serde(default = "epoch")]
    pub created_at: Timestamp,
    #[serde(default = "epoch")]
    pub updated_at: Timestamp,
}

fn epoch() -> Timestamp {
    Timestamp::UNIX_EPOCH
}

impl ProjectInput {
    /// Create a constant input with empty description/unit and epoch timestamps
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category_id: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            id: InputId::new(id),
            name: name.into(),
            description: String::new(),
            category_id: category_id.into(),
            unit: String::new(),
            data_type: DataType::Constant,
            expense_type: ExpenseType::Unspecified,
            value,
            created_at: epoch(),
            updated_at: epoch(),
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    #[must_use]
    pub fn with_expense_type(mut self, expense_type: ExpenseType) -> Self {
        self.expense_type = expense_type;
        self
    }

    /// Category tag normalized for matching (lowercase, `_` separated)
    pub fn category_key(&self) -> String {
        normalize_tag(&self.category_id)
    }
}
