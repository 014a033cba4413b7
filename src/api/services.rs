use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Local;
use http_body_util::BodyExt;
use tracing::{error, warn};

use super::{
    models::{HealthResponse, PrintRequest, PrintResponse},
    state::AppState,
};
use crate::api::error::ApiError;
use crate::render::render;
use crate::templates::DEFAULT_TYPE;

/// Print job endpoint (POST /print)
///
/// Per-request flow, in order:
/// 1. Read the body (bounded by `server.max_body_bytes`); malformed or
///    absent JSON is treated as an empty request, not a hard error.
/// 2. Validate: `task` must be non-empty after trimming -> 400 otherwise,
///    with no ticket number consumed.
/// 3. Pre-check the print executable exists -> 500 otherwise, with no
///    number consumed.
/// 4. Consume a ticket number from the sequencer. From here on the number
///    is burned even if rendering or printing fails; the sequence is
///    allowed gaps, never duplicates.
/// 5. Resolve the template/width for the ticket type, wrap and render ->
///    500 on a template error.
/// 6. Append `(ticket_num, ticket_type, task)` to the ticket event log,
///    independent of print outcome.
/// 7. Invoke the print command with the rendered text -> 500 on failure.
/// 8. Respond 200 `{"status":"ok","ticket_num":<n>}`.
pub async fn print_ticket(
    State(state): State<AppState>,
    body: axum::body::Body,
) -> Result<impl IntoResponse, ApiError> {
    let body_bytes = read_body(body, state.config.server.max_body_bytes).await?;

    // Malformed JSON degrades to an empty request, which then fails task
    // validation below -- mirrors treating a bad body as an empty object.
    let request: PrintRequest = serde_json::from_slice(&body_bytes).unwrap_or_default();

    let task = request.task.as_deref().unwrap_or("").trim().to_string();
    let ticket_type = {
        let raw = request.ticket_type.as_deref().unwrap_or("").trim();
        if raw.is_empty() { DEFAULT_TYPE } else { raw }.to_string()
    };

    if task.is_empty() {
        warn!("Received print request without 'task'");
        state.metrics.request_rejected();
        return Err(ApiError::MissingTask);
    }

    if !state.printer.script_exists() {
        error!(
            path = %state.printer.script_path().display(),
            "Print script not found"
        );
        return Err(ApiError::ScriptNotFound(
            state.printer.script_path().to_path_buf(),
        ));
    }

    let ticket_num = state.sequencer.next().await?;
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let (template, width) = state.templates.resolve(&ticket_type);
    let ticket_text =
        render(template, width, ticket_num, &timestamp, &task).map_err(|e| {
            error!(ticket_type = %ticket_type, error = %e, "Error formatting template");
            ApiError::RenderFailed {
                ticket_type: ticket_type.clone(),
                source: e,
            }
        })?;

    // Audit trail entry, written whether or not the print succeeds.
    state.ticket_log.append(ticket_num, &ticket_type, &task).await;

    state.printer.invoke(&ticket_text).await.map_err(|e| {
        error!(ticket_num, error = %e, "Print failed");
        state.metrics.print_failed();
        ApiError::PrintFailed(e)
    })?;

    state.metrics.ticket_issued();

    let response = PrintResponse {
        status: "ok".to_string(),
        ticket_num,
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Health check endpoint (GET /health)
///
/// Trivial liveness probe, no side effects.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}

/// Reads the request body and enforces the configured size limit.
async fn read_body(body: axum::body::Body, max_size: usize) -> Result<Vec<u8>, ApiError> {
    let data = match body.collect().await {
        Ok(collected) => collected.to_bytes().to_vec(),
        Err(err) => {
            // An unreadable body degrades to an empty one, same as
            // malformed JSON; the request then fails task validation.
            warn!(error = %err, "Failed to read request body");
            Vec::new()
        }
    };

    if data.len() > max_size {
        return Err(ApiError::BodyTooLarge(data.len()));
    }

    Ok(data)
}
