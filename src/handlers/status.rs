//! # Status Check Handlers
//!
//! Create and list endpoints for status check records.
//!
//! Persistence is best-effort. A storage error never turns into an error
//! response: create still returns the record it attempted to store, and list
//! returns an empty array. Callers cannot tell whether a record was stored.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, error, info, instrument};

use crate::error::AppResult;
use crate::models::{AppState, StatusCheck, StatusCheckCreate};
use crate::services::store::StorageError;
use crate::utils::constant::LIST_LIMIT;

/// Creates a status check.
///
/// POST /status `{"client_name": string}`
///
/// # Returns
///
/// - `200 OK` - The created record, whether or not it was persisted
/// - `4xx` - Body is not a JSON object with a string `client_name`
#[instrument(
    skip_all,
    fields(request_id = %uuid::Uuid::new_v4())
)]
pub async fn create_status_check(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StatusCheckCreate>, JsonRejection>,
) -> AppResult<Json<StatusCheck>> {
    let Json(payload) = payload?;
    let record = StatusCheck::from(payload);
    debug!(id = %record.id, client_name = %record.client_name, "Status check built");

    match state.storage.insert(&record).await {
        Ok(()) => info!(id = %record.id, "Status check stored"),
        Err(e) => log_degraded(&e, "Status check not stored"),
    }

    Ok(Json(record))
}

/// Lists stored status checks.
///
/// GET /status
///
/// # Returns
///
/// - `200 OK` - Up to [`LIST_LIMIT`] records, or `[]` if storage is unavailable
///   or the fetch failed
#[instrument(
    skip_all,
    fields(request_id = %uuid::Uuid::new_v4())
)]
pub async fn get_status_checks(State(state): State<Arc<AppState>>) -> Json<Vec<StatusCheck>> {
    let records = state
        .storage
        .list_all(LIST_LIMIT)
        .await
        .unwrap_or_else(|e| {
            log_degraded(&e, "Returning empty status check list");
            Vec::new()
        });

    debug!(count = records.len(), "Status checks listed");
    Json(records)
}

fn log_degraded(e: &StorageError, context: &str) {
    match e {
        StorageError::Unavailable => debug!("{context}: storage unavailable"),
        _ => error!(error = %e, "{context}"),
    }
}
