use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use slink_core::{RelayError, ShortenerError};
use thiserror::Error;
use tracing::{error, warn};

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Shortener(#[from] ShortenerError),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl AppError {
    fn status_and_message(self) -> (StatusCode, String) {
        match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Shortener(err) => match err {
                ShortenerError::InvalidUrl(_) | ShortenerError::InvalidShortCode(_) => {
                    (StatusCode::BAD_REQUEST, err.to_string())
                }
                // Unknown codes answer 400; existing clients depend on it.
                ShortenerError::NotFound(_) => (StatusCode::BAD_REQUEST, err.to_string()),
                ShortenerError::UrlConflict(_) => (StatusCode::CONFLICT, err.to_string()),
                ShortenerError::CodeUnavailable(_) | ShortenerError::Storage(_) => {
                    error!(error = %err, "link registry failure");
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
                }
            },
            AppError::Relay(err) => match err {
                RelayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, err.to_string()),
                RelayError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
                RelayError::Remote(_) => {
                    warn!(error = %err, "execution service failure");
                    (StatusCode::BAD_GATEWAY, err.to_string())
                }
                RelayError::Storage(_) => {
                    error!(error = %err, "submission storage failure");
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
                }
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (
            status,
            Json(ErrorResponse {
                error: true,
                message,
            }),
        )
            .into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
