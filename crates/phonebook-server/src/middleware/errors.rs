//! Error translation into HTTP responses

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use phonebook_core::PhonebookError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Phonebook(#[from] PhonebookError),

    /// The request body could not be decoded.
    #[error("{0}")]
    BadBody(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadBody(rejection.body_text())
    }
}

pub(crate) fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Phonebook(PhonebookError::NotFound) => StatusCode::NOT_FOUND.into_response(),
            ApiError::Phonebook(PhonebookError::Storage(message)) => {
                error!("Unhandled storage error: {}", message);
                error_body(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
            ApiError::Phonebook(e) => error_body(StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::BadBody(message) => error_body(StatusCode::BAD_REQUEST, message),
        }
    }
}

/// Reached by any request no route claimed.
pub async fn unknown_endpoint() -> Response {
    error_body(StatusCode::NOT_FOUND, "unknown endpoint")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: ApiError) -> (StatusCode, Vec<u8>) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn render_json(err: ApiError) -> (StatusCode, Value) {
        let (status, body) = render(err).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_client_errors_map_to_400() {
        let cases = [
            (PhonebookError::MalformedId("abc".into()), "malformatted id"),
            (PhonebookError::MissingField, "name or number missing"),
            (
                PhonebookError::Validation("name must be unique".into()),
                "name must be unique",
            ),
            (
                PhonebookError::DuplicateName("Arto Hellas".into()),
                "Name Arto Hellas already exists",
            ),
        ];

        for (err, message) in cases {
            let (status, body) = render_json(err.into()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "error": message }));
        }
    }

    #[tokio::test]
    async fn test_not_found_has_empty_body() {
        let (status, body) = render(PhonebookError::NotFound.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_storage_error_is_hidden() {
        let (status, body) = render_json(PhonebookError::Storage("disk I/O error".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "internal server error" }));
    }

    #[tokio::test]
    async fn test_unknown_endpoint() {
        let response = unknown_endpoint().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!({ "error": "unknown endpoint" })
        );
    }
}
