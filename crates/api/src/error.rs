//! API error type and its mapping onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use db::DbError;
use domain::{ErrorDetail, ErrorEnvelope, FailureEnvelope, PersonId, ValidationError};
use thiserror::Error;
use tracing::error;

/// Every way a request can fail. None of them are retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A write request arrived without a body.
    #[error("Missing body of the {0} request!")]
    MissingBody(&'static str),

    /// The body is not a JSON object of the expected shape.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// The payload parsed but broke one or more field rules.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The `:id` path segment is not an integer.
    #[error("Parameter 'id' must be a valid number!")]
    InvalidId(String),

    #[error("There was no person with id {0}!")]
    NotFound(PersonId),

    /// Anything the data layer reported besides "not found".
    #[error("{context}")]
    Storage {
        context: String,
        #[source]
        source: DbError,
    },
}

impl ApiError {
    /// Classify a store failure for the record `id`.
    pub fn from_db(err: DbError, id: PersonId, context: impl Into<String>) -> Self {
        match err {
            DbError::NotFound => ApiError::NotFound(id),
            source => ApiError::Storage { context: context.into(), source },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingBody(_)
            | ApiError::MalformedBody(_)
            | ApiError::Validation(_)
            | ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation(errors) => {
                let body = ErrorEnvelope { error: ErrorDetail::Many(errors.into_messages()) };
                (status, Json(body)).into_response()
            }
            ApiError::MissingBody(_) | ApiError::MalformedBody(_) | ApiError::InvalidId(_) => {
                let body = ErrorEnvelope { error: ErrorDetail::One(self.to_string()) };
                (status, Json(body)).into_response()
            }
            ApiError::NotFound(_) => {
                let body = FailureEnvelope { message: self.to_string(), storage_error: None };
                (status, Json(body)).into_response()
            }
            ApiError::Storage { context, source } => {
                error!("{}: {}", context, source);
                let body = FailureEnvelope {
                    message: context,
                    storage_error: Some(source.to_string()),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
