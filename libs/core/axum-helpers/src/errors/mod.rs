pub mod handlers;

use serde::Serialize;

/// JSON body for router-level errors (unknown path).
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
}
