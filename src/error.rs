//! # Centralized Error Handling
//!
//! Errors that cross the HTTP boundary. Storage failures never reach this
//! type; [`handlers`](crate::handlers) degrade them to default responses.
//! The only client-visible failure is a malformed request body.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Central application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid request body: {0}")]
    Payload(#[from] JsonRejection),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Payload(rejection) => {
                warn!(error = %rejection, "Rejected request body");
                (rejection.status(), rejection.body_text())
            }
        };

        let body = Json(ErrorBody { message });
        (status, body).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
