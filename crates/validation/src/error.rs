use serde::Serialize;
use thiserror::Error;

use crate::messages::MESSAGE_SEPARATOR;

/// One failed constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    /// The constraint tag, e.g. `required` or `max`.
    pub constraint: &'static str,
    pub message: String,
}

/// All violations found in a candidate, at most one per field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", join_messages(.violations))]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub(crate) fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

fn join_messages(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join(MESSAGE_SEPARATOR)
}
