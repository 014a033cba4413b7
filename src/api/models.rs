//! API models for the ticketpress print endpoint.
//!
//! The external contract is small:
//! - `POST /print` accepts a [`PrintRequest`] JSON body and responds with
//!   a [`PrintResponse`] on success.
//! - `GET /health` responds `{"status":"ok"}`.
//!
//! A request body:
//!
//! ```json
//! {
//!   "task": "Buy milk\n\nAlso eggs",
//!   "ticket_type": "chore"
//! }
//! ```
//!
//! `ticket_type` is optional and selects which template/width renders the
//! ticket; it defaults to `"default"`. A malformed or absent body is
//! treated as an empty request (which then fails task validation) rather
//! than as a parse error.

use serde::{Deserialize, Serialize};

/// One print job request. Transient, one per HTTP call.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PrintRequest {
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub ticket_type: Option<String>,
}

/// Success body for `POST /print`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PrintResponse {
    pub status: String,
    pub ticket_num: u64,
}

/// Body for `GET /health`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HealthResponse {
    pub status: String,
}
