//! Failure responses for the planner API.
//!
//! Every error leaves the service as `{"error", "code", "detail"}` JSON.
//! `detail` repeats `error` because the bundled frontend reads that key.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use planner_core::error::CoreError;
use serde::Serialize;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Errors a planner handler can return.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing project or place, blank name, or the deletion guard.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body is not a usable JSON document for the endpoint.
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    /// The SQLite store failed.
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    /// A state the handlers never expect, such as a row vanishing right
    /// after it was written.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            // The deletion guard answers 400, as deployed clients expect.
            AppError::Core(CoreError::Validation(_) | CoreError::Conflict(_)) => {
                StatusCode::BAD_REQUEST
            }
            AppError::InvalidBody(rejection) => rejection.status(),
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => "NOT_FOUND",
            AppError::Core(CoreError::Validation(_)) => "VALIDATION_ERROR",
            AppError::Core(CoreError::Conflict(_)) => "CONFLICT",
            AppError::InvalidBody(_) => "INVALID_BODY",
            AppError::Store(_) | AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Text shown to the client. Store and internal failures are masked.
    fn client_message(&self) -> String {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                format!("{entity} with id {id} not found")
            }
            AppError::Core(CoreError::Validation(msg) | CoreError::Conflict(msg)) => msg.clone(),
            AppError::InvalidBody(rejection) => rejection.body_text(),
            AppError::Store(_) | AppError::Internal(_) => INTERNAL_MESSAGE.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    code: &'static str,
    detail: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, code = self.code(), "Request rejected");
        }

        let message = self.client_message();
        let body = ErrorBody {
            error: &message,
            code: self.code(),
            detail: &message,
        };
        (status, Json(body)).into_response()
    }
}

/// JSON body extractor whose rejections use the planner error body instead
/// of axum's plain-text one.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
