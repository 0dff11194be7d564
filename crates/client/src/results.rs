//! Uniform outcome of one API call.

use domain::ErrorEnvelope;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// What a single request produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Results<T> {
    /// HTTP status, or `None` when no response was received at all.
    pub status: Option<u16>,
    /// Server message (success text, not-found text, failure context), or the
    /// transport error when `status` is `None`.
    pub message: String,
    /// Typed payload of a successful response.
    pub data: Option<T>,
    /// Client-error messages from a 4xx body.
    pub errors: Vec<String>,
}

impl<T> Results<T> {
    /// Request never completed.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            data: None,
            errors: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Some(200)
    }

    /// Status as printed in alerts; `-1` when there was no response.
    pub fn status_code(&self) -> i32 {
        self.status.map_or(-1, i32::from)
    }
}

impl<T: DeserializeOwned> Results<T> {
    /// Fold a transport result into `Results`.
    pub async fn from_response(response: reqwest::Result<Response>) -> Self {
        let response = match response {
            Ok(response) => response,
            Err(e) => {
                warn!("request failed: {}", e);
                return Self::unreachable(e.to_string());
            }
        };

        let status = response.status();
        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!("unreadable {} response body: {}", status, e);
                return Self {
                    status: Some(status.as_u16()),
                    message: String::new(),
                    data: None,
                    errors: Vec::new(),
                };
            }
        };

        Self::from_body(status, body)
    }

    /// Interpret an already-decoded response body.
    pub fn from_body(status: StatusCode, mut body: Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        let data = if status.is_success() {
            // Re-deserialize so callers never hold the transport's JSON tree.
            match body.get_mut("data").map(Value::take) {
                Some(data) => serde_json::from_value(data)
                    .map_err(|e| warn!("unexpected payload shape: {}", e))
                    .ok(),
                None => None,
            }
        } else {
            None
        };

        let errors = if status.is_client_error() {
            serde_json::from_value::<ErrorEnvelope>(body)
                .map(|envelope| envelope.error.into_messages())
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        Self {
            status: Some(status.as_u16()),
            message,
            data,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Person;
    use serde_json::json;

    #[test]
    fn success_body_is_typed() {
        let results: Results<Person> = Results::from_body(
            StatusCode::OK,
            json!({ "message": "Success!", "data": { "id": 1, "fname": "A", "lname": "B", "age": 2 } }),
        );
        assert!(results.is_success());
        assert_eq!(results.message, "Success!");
        assert_eq!(results.data.unwrap().age, 2);
        assert!(results.errors.is_empty());
    }

    #[test]
    fn validation_list_becomes_errors() {
        let results: Results<Person> = Results::from_body(
            StatusCode::BAD_REQUEST,
            json!({ "error": ["Missing parameter 'fname'!", "Missing parameter 'age'!"] }),
        );
        assert_eq!(results.status, Some(400));
        assert_eq!(results.errors, ["Missing parameter 'fname'!", "Missing parameter 'age'!"]);
        assert!(results.data.is_none());
    }

    #[test]
    fn single_error_string_becomes_one_error() {
        let results: Results<Person> = Results::from_body(
            StatusCode::BAD_REQUEST,
            json!({ "error": "Missing body of the POST request!" }),
        );
        assert_eq!(results.errors, ["Missing body of the POST request!"]);
    }

    #[test]
    fn server_failure_keeps_message_and_no_errors() {
        let results: Results<Vec<Person>> = Results::from_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "message": "boom", "mysql_error_msg": "pool timed out" }),
        );
        assert_eq!(results.status_code(), 500);
        assert_eq!(results.message, "boom");
        assert!(results.errors.is_empty());
        assert!(results.data.is_none());
    }

    #[test]
    fn unreachable_uses_sentinel_status() {
        let results: Results<bool> = Results::unreachable("connection refused");
        assert_eq!(results.status, None);
        assert_eq!(results.status_code(), -1);
        assert!(!results.is_success());
    }
}
