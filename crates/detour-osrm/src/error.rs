//! Backend error taxonomy.

use thiserror::Error;

/// Failure talking to a routing or geocoding backend. All variants are
/// contained inside the planner loop; a failed candidate contributes zero
/// routes and never aborts the pipeline.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("no routes found")]
    NoRoute,
}
