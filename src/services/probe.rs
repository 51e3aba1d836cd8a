//! # Start-up Availability Probe
//!
//! Decides once, at process start, whether the document store can be used.
//! A failed probe is never fatal: the service starts with unavailable storage
//! and keeps answering requests. There is no re-probing later.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::store::{MongoStore, StatusStorage};
use crate::config::StoreConfig;

/// Probes the configured MongoDB server and returns the storage adapter to
/// use for the rest of the process lifetime.
///
/// Any failure (malformed connection string, unreachable host, rejected
/// credentials) yields [`StatusStorage::unavailable`] after logging one
/// diagnostic.
#[instrument(skip_all, fields(db_name = %config.db_name))]
pub async fn probe(config: &StoreConfig) -> StatusStorage {
    let store = match MongoStore::connect(config).await {
        Ok(store) => store,
        Err(e) => {
            warn!(error = %e, "Invalid MongoDB configuration, running without storage");
            return StatusStorage::unavailable();
        }
    };

    if let Err(e) = store.ping(config.probe_timeout).await {
        warn!(error = %e, "MongoDB is unreachable, running without storage");
        // Not shut down: its monitors may still be connecting.
        drop(store);
        return StatusStorage::unavailable();
    }

    info!("MongoDB is available");
    StatusStorage::new(Arc::new(store))
}
