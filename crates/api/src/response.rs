//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "status": "ok" }` acknowledgment for mutations without a payload.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
