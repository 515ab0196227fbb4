use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use models::ValidationErrors;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    #[error("Malformed query string: {0}")]
    MalformedQuery(#[from] QueryRejection),

    #[error("Malformed path: {0}")]
    MalformedPath(#[from] PathRejection),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Validation failed",
                    "violations": errors.messages(),
                }),
            ),
            ApiError::MalformedBody(rejection) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": rejection.body_text() }),
            ),
            ApiError::MalformedQuery(rejection) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": rejection.body_text() }),
            ),
            ApiError::MalformedPath(rejection) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": rejection.body_text() }),
            ),
            ApiError::JsonError(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": self.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
