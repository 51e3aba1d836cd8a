//! # Status Check Storage
//!
//! This module is the single point of contact with the document store. The
//! [`StatusStore`] trait is the backend seam, [`MongoStore`] is the MongoDB
//! implementation, and [`StatusStorage`] is the adapter handed to request
//! handlers.
//!
//! ## Availability
//!
//! [`StatusStorage`] either wraps a backend or is unavailable. The choice is
//! made once at start-up by [`probe`](crate::services::probe::probe) and never
//! revisited. An unavailable adapter answers every call with
//! [`StorageError::Unavailable`] without touching the network; handlers
//! decide how to degrade.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::{self, Document, doc},
    options::ClientOptions,
};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::config::StoreConfig;
use crate::models::StatusCheck;
use crate::utils::constant::COLLECTION_NAME;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("failed to encode record: {0}")]
    Encode(#[from] bson::ser::Error),

    #[error("no response within {0:?}")]
    Timeout(Duration),
}

/// Trait for status check storage backends
///
/// Implementations must be safe to share across concurrently running
/// requests through a single handle.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Writes exactly one record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the record could not be written.
    async fn insert_one(&self, record: &StatusCheck) -> Result<(), StorageError>;

    /// Fetches at most `limit` records in the store's natural order.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the fetch itself fails.
    async fn find_all(&self, limit: i64) -> Result<Vec<StatusCheck>, StorageError>;

    /// Releases the connection handle. Called once on shutdown.
    async fn close(&self) {}
}

/// MongoDB backend over the `status_checks` collection.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    db_name: String,
    collection: Collection<Document>,
}

impl MongoStore {
    /// Builds a client for the configured server.
    ///
    /// Only the connection string is validated here; the driver connects
    /// lazily, so use [`MongoStore::ping`] to find out whether the server is
    /// reachable. Timeouts set in the connection string are left as given.
    #[instrument(skip_all, fields(db_name = %config.db_name))]
    pub async fn connect(config: &StoreConfig) -> Result<Self, StorageError> {
        let options = ClientOptions::parse(&config.mongo_url).await?;
        let client = Client::with_options(options)?;
        let collection = client
            .database(&config.db_name)
            .collection::<Document>(COLLECTION_NAME);

        debug!("MongoDB client created");
        Ok(Self {
            client,
            db_name: config.db_name.clone(),
            collection,
        })
    }

    /// Round-trips a `ping` command to the configured database, giving up
    /// after `timeout`.
    ///
    /// The bound applies to this call only; the client keeps its own
    /// server-selection and connect timeouts for later operations.
    #[instrument(skip_all, fields(db_name = %self.db_name, ?timeout))]
    pub async fn ping(&self, timeout: Duration) -> Result<(), StorageError> {
        let database = self.client.database(&self.db_name);
        let ping = database
            .run_command(doc! { "ping": 1 })
            .into_future();

        tokio::time::timeout(timeout, ping)
            .await
            .map_err(|_| StorageError::Timeout(timeout))??;
        debug!("MongoDB ping succeeded");
        Ok(())
    }
}

#[async_trait]
impl StatusStore for MongoStore {
    #[instrument(skip_all, fields(id = %record.id))]
    async fn insert_one(&self, record: &StatusCheck) -> Result<(), StorageError> {
        let document = record.to_document()?;
        self.collection.insert_one(document).await?;
        debug!("Status check inserted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_all(&self, limit: i64) -> Result<Vec<StatusCheck>, StorageError> {
        let documents: Vec<Document> = self
            .collection
            .find(doc! {})
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        let fetched = documents.len();
        let records = decode_documents(documents);

        debug!(fetched, returned = records.len(), "Status checks fetched");
        Ok(records)
    }

    async fn close(&self) {
        info!("Closing MongoDB client");
        self.client.clone().shutdown().await;
    }
}

/// Decodes fetched documents, skipping (and logging) any that are malformed.
///
/// Order is preserved. A bad document never fails the whole list.
pub fn decode_documents(documents: Vec<Document>) -> Vec<StatusCheck> {
    documents
        .into_iter()
        .filter_map(|document| match StatusCheck::from_document(document) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, "Skipping malformed status check document");
                None
            }
        })
        .collect()
}

/// Storage adapter shared by request handlers.
///
/// Cloning is cheap; all clones share the same backend handle.
#[derive(Clone, Default)]
pub struct StatusStorage {
    backend: Option<Arc<dyn StatusStore>>,
}

impl StatusStorage {
    /// Creates an available adapter over `backend`.
    pub fn new(backend: Arc<dyn StatusStore>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Creates an adapter for which every operation reports
    /// [`StorageError::Unavailable`].
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    /// Whether a backend was established at start-up.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Persists `record`.
    ///
    /// # Errors
    ///
    /// [`StorageError::Unavailable`] if no backend was established, or the
    /// backend's own error. Nothing is written on any error path.
    pub async fn insert(&self, record: &StatusCheck) -> Result<(), StorageError> {
        match &self.backend {
            Some(backend) => backend.insert_one(record).await,
            None => Err(StorageError::Unavailable),
        }
    }

    /// Fetches at most `limit` records.
    ///
    /// # Errors
    ///
    /// [`StorageError::Unavailable`] if no backend was established, or the
    /// backend's own error.
    pub async fn list_all(&self, limit: i64) -> Result<Vec<StatusCheck>, StorageError> {
        match &self.backend {
            Some(backend) => backend.find_all(limit).await,
            None => Err(StorageError::Unavailable),
        }
    }

    /// Closes the backend handle if one was established.
    pub async fn close(&self) {
        if let Some(backend) = &self.backend {
            backend.close().await;
        }
    }
}
