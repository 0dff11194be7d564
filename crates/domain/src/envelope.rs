//! JSON bodies exchanged between the REST API and its clients.
//!
//! | status | body                                          |
//! |--------|-----------------------------------------------|
//! | 200    | `{"message": .., "data": ..}`                 |
//! | 400    | `{"error": "text"}` or `{"error": ["..", ..]}` |
//! | 404    | `{"message": ..}`                             |
//! | 500    | `{"message": .., "mysql_error_msg": ..}`      |

use serde::{Deserialize, Serialize};

/// Success body. `data` is `true` for operations without a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self { message: message.into(), data }
    }
}

/// Either a single client-error message or the list of validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    One(String),
    Many(Vec<String>),
}

impl ErrorDetail {
    pub fn into_messages(self) -> Vec<String> {
        match self {
            ErrorDetail::One(message) => vec![message],
            ErrorDetail::Many(messages) => messages,
        }
    }
}

/// 400 body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

/// 404 and 500 body. The storage field keeps its historical wire name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureEnvelope {
    pub message: String,
    #[serde(
        rename = "mysql_error_msg",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub storage_error: Option<String>,
}
