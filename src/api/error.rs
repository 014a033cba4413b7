use std::path::PathBuf;

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use thiserror::Error;

use crate::printer::PrintError;
use crate::render::RenderError;

/// Request-level failures, each mapped to a fixed status code and JSON
/// body. Every failure is handled here and converted to a response; none
/// should ever crash the process.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing 'task' in JSON body")]
    MissingTask,
    #[error("request body too large: {0} bytes")]
    BodyTooLarge(usize),
    #[error("print script not found at {}", .0.display())]
    ScriptNotFound(PathBuf),
    #[error("ticket counter unavailable: {0}")]
    CounterUnavailable(#[from] std::io::Error),
    #[error("template formatting failed for '{ticket_type}': {source}")]
    RenderFailed {
        ticket_type: String,
        #[source]
        source: RenderError,
    },
    #[error("print failed: {0}")]
    PrintFailed(#[source] PrintError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingTask => StatusCode::BAD_REQUEST,
            ApiError::BodyTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::ScriptNotFound(_)
            | ApiError::CounterUnavailable(_)
            | ApiError::RenderFailed { .. }
            | ApiError::PrintFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        // Body shapes are part of the external contract; clients match on
        // the "error" string.
        let body = match &self {
            ApiError::MissingTask => json!({"error": "Missing 'task' in JSON body"}),
            ApiError::BodyTooLarge(bytes) => {
                json!({"error": "Request body too large", "bytes": bytes})
            }
            ApiError::ScriptNotFound(path) => {
                json!({"error": "Print script not found", "path": path.display().to_string()})
            }
            ApiError::CounterUnavailable(_) => json!({"error": "Ticket counter unavailable"}),
            ApiError::RenderFailed { .. } => json!({"error": "Template formatting failed"}),
            ApiError::PrintFailed(cause) => {
                json!({"error": "Print failed", "details": cause.to_string()})
            }
        };

        (status, Json(body)).into_response()
    }
}
