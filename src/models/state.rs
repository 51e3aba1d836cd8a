use tracing::info;

use crate::services::store::StatusStorage;

/// Application state shared across requests. Needs to be thread-safe.
///
/// Built once at start-up and never mutated by handlers.
pub struct AppState {
    /// Storage adapter for status checks, available or not.
    pub storage: StatusStorage,
}

impl AppState {
    /// Creates a new application state around the given storage adapter.
    pub fn new(storage: StatusStorage) -> Self {
        info!(
            storage_available = storage.is_available(),
            "Initializing application state"
        );

        Self { storage }
    }
}
