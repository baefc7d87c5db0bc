use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::ClimateError;
use crate::utils::constants::INVALID_DATE_MESSAGE;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl IntoResponse for ClimateError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ClimateError::InvalidDate(_) => {
                (StatusCode::BAD_REQUEST, INVALID_DATE_MESSAGE.to_string())
            }
            ClimateError::InvalidRange { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            _ => {
                tracing::error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        if self.is_client_error() {
            tracing::debug!(error = %self, "Rejected request");
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
