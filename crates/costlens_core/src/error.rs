use std::fmt;

/// Errors reported by the sensitivity session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Save requested with no variables selected
    EmptySelection,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::EmptySelection => {
                write!(f, "cannot save an analysis with no variables selected")
            }
        }
    }
}

impl std::error::Error for SessionError {}
