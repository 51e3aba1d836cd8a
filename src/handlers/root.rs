//! # Root Handler
//!
//! Greeting endpoint at the service root. Deployment checks use it to see
//! whether the service is up.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// GET /
///
/// Always returns `200 OK` with `{"message": "Hello World"}`.
#[instrument]
pub async fn root() -> Json<RootResponse> {
    debug!("Root endpoint accessed");
    Json(RootResponse {
        message: "Hello World".to_string(),
    })
}
