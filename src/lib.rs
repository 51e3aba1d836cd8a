//! # Status Check Service
//!
//! A small backend that records client heartbeats ("status checks") in
//! MongoDB and lists them back. Storage is best-effort: if the database is
//! unreachable at start-up, or an operation fails, the endpoints keep
//! answering `200 OK` with degraded data.
//!
//! ## Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`cors`] - CORS layer construction
//! - [`handlers`] - HTTP request handlers
//! - [`models`] - Status check records and shared application state
//! - [`services`] - Storage adapter and the start-up availability probe
//! - [`smoke`] - Deployment checks run by the `status-smoke` binary
//! - [`telemetry`] - Tracing subscriber set-up
//! - [`utils`] - Constants

pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod smoke;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::cors::cors_layer;
use crate::handlers::{create_status_check, get_status_checks, root};
use crate::models::AppState;
use crate::services::store::StatusStorage;

/// Creates an Axum router over `storage`.
///
/// This is a convenience function that wraps `storage` in a fresh
/// [`AppState`] and calls [`app_with_state`].
#[inline]
pub fn app(storage: StatusStorage, cors_origins: &[String]) -> Router {
    app_with_state(Arc::new(AppState::new(storage)), cors_origins)
}

/// Creates an Axum router with application routes and state.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `cors_origins` - Allowed origins; `*` allows any
///
/// # Routes
///
/// - `GET /` - Greeting
/// - `POST /status` - Create a status check
/// - `GET /status` - List status checks
pub fn app_with_state(state: Arc<AppState>, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/status", get(get_status_checks).post(create_status_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}
