//! Domain-level error types.

use thiserror::Error;

/// One or more field rules failed for a person payload.
///
/// Messages keep the order in which the fields were checked
/// (`fname`, `lname`, `age`) and the list is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid person: {}", .0.join(" "))]
pub struct ValidationError(pub Vec<String>);

impl ValidationError {
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}
