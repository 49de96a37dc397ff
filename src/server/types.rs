use serde::{Deserialize, Serialize};

/// Label returned for every failed estimate.
pub const ESTIMATE_FAILED: &str = "Failed to estimate price";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

impl ErrorResponse {
    pub fn estimate_failed(details: impl Into<String>) -> Self {
        Self {
            error: ESTIMATE_FAILED.to_string(),
            details: details.into(),
        }
    }
}
