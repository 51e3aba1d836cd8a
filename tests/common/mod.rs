#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use status_check::{
    config::StoreConfig,
    models::StatusCheck,
    services::store::{StatusStorage, StatusStore, StorageError},
};
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // `test_log` may have installed a subscriber already
        let _ = tracing_subscriber::fmt()
            .with_env_filter("status_check=debug")
            .with_test_writer()
            .try_init();
    });
}

/// An in-memory store that keeps inserted records for inspection.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<StatusCheck>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with `count` records, bypassing the HTTP layer
    pub fn seed(&self, count: usize) {
        let mut records = self.records.lock().unwrap();
        for i in 0..count {
            records.push(StatusCheck::new(format!("seed_{i}")));
        }
    }

    /// Get the count of stored records
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Get all stored records
    pub fn records(&self) -> Vec<StatusCheck> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusStore for MemoryStore {
    async fn insert_one(&self, record: &StatusCheck) -> Result<(), StorageError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn find_all(&self, limit: i64) -> Result<Vec<StatusCheck>, StorageError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .take(limit)
            .cloned()
            .collect())
    }
}

/// A store whose every operation fails, as if the database went away after
/// start-up.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl StatusStore for FailingStore {
    async fn insert_one(&self, _record: &StatusCheck) -> Result<(), StorageError> {
        Err(failure())
    }

    async fn find_all(&self, _limit: i64) -> Result<Vec<StatusCheck>, StorageError> {
        Err(failure())
    }
}

fn failure() -> StorageError {
    StorageError::Database(mongodb::error::Error::custom("simulated outage"))
}

/// Store configuration pointing at a port nothing listens on.
pub fn unreachable_store_config() -> StoreConfig {
    StoreConfig {
        mongo_url: "mongodb://127.0.0.1:1/?directConnection=true".to_string(),
        db_name: "status_check_test".to_string(),
        probe_timeout: Duration::from_millis(300),
    }
}

/// Spawns the application over `storage` and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app_with_origins(storage: StatusStorage, cors_origins: &[&str]) -> String {
    init_tracing_once();

    let cors_origins: Vec<String> = cors_origins.iter().map(ToString::to_string).collect();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let app = status_check::app(storage, &cors_origins);
        axum::serve(listener, app).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client.get(format!("{address}/")).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    address
}

/// Spawns the application with the default `*` CORS configuration.
pub async fn spawn_app(storage: StatusStorage) -> String {
    spawn_app_with_origins(storage, &["*"]).await
}

/// Spawns the application over a fresh [`MemoryStore`] and returns both.
pub async fn spawn_app_with_memory() -> (String, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let storage = StatusStorage::new(Arc::clone(&store) as Arc<dyn StatusStore>);
    (spawn_app(storage).await, store)
}
