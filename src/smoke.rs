//! # Deployment Smoke Checks
//!
//! A fixed sequence of checks run against a live status-check service over
//! HTTP: root greeting, CORS preflight, create, list, persistence and
//! concurrent creates. Used by the `status-smoke` binary.

use std::collections::HashSet;

use futures::future::join_all;
use reqwest::{Client, Method, StatusCode};
use thiserror::Error;
use uuid::Uuid;

use crate::{handlers::RootResponse, models::StatusCheck};

const CONCURRENT_CREATES: usize = 5;

/// Why a single check failed
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("{0}")]
    Unexpected(String),
}

pub type CheckResult = Result<String, CheckError>;

/// Runs deployment checks against one service root.
pub struct Smoke {
    client: Client,
    base_url: String,
    origin: String,
}

impl Smoke {
    /// Creates a checker for the service at `base_url` that sends `origin`
    /// with CORS requests. Any path prefix belongs in `base_url`.
    pub fn new(base_url: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            origin: origin.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Runs every check in order and returns each result by name.
    pub async fn run_all(&self) -> Vec<(&'static str, CheckResult)> {
        vec![
            ("Root", self.check_root().await),
            ("CORS preflight", self.check_cors().await),
            ("Create status check", self.check_create().await),
            ("List status checks", self.check_list().await),
            ("Persistence", self.check_persistence().await),
            ("Concurrent creates", self.check_concurrency().await),
        ]
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    async fn create(&self, client_name: &str) -> Result<StatusCheck, CheckError> {
        let response = self
            .client
            .post(self.url("/status"))
            .json(&serde_json::json!({ "client_name": client_name }))
            .send()
            .await?;
        if response.status() != StatusCode::OK {
            return Err(CheckError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn list(&self) -> Result<Vec<StatusCheck>, CheckError> {
        let response = self.client.get(self.url("/status")).send().await?;
        if response.status() != StatusCode::OK {
            return Err(CheckError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    pub async fn check_root(&self) -> CheckResult {
        let response = self.client.get(self.url("/")).send().await?;
        if response.status() != StatusCode::OK {
            return Err(CheckError::Status(response.status()));
        }
        let body: RootResponse = response.json().await?;
        if body.message != "Hello World" {
            return Err(CheckError::Unexpected(format!(
                "unexpected message {:?}",
                body.message
            )));
        }
        Ok("root endpoint responding".to_string())
    }

    pub async fn check_cors(&self) -> CheckResult {
        let response = self
            .client
            .request(Method::OPTIONS, self.url("/status"))
            .header("Origin", &self.origin)
            .header("Access-Control-Request-Method", "POST")
            .header("Access-Control-Request-Headers", "Content-Type")
            .send()
            .await?;

        let Some(value) = response.headers().get("access-control-allow-origin") else {
            return Err(CheckError::Unexpected(
                "missing access-control-allow-origin header".to_string(),
            ));
        };

        if value == self.origin.as_str() || value == "*" {
            Ok(format!("allow-origin: {}", self.origin))
        } else {
            Err(CheckError::Unexpected(format!(
                "allow-origin is {value:?}, expected {:?}",
                self.origin
            )))
        }
    }

    pub async fn check_create(&self) -> CheckResult {
        let client_name = format!("SmokeClient_{}", &Uuid::new_v4().simple().to_string()[..8]);
        let record = self.create(&client_name).await?;
        if record.client_name != client_name {
            return Err(CheckError::Unexpected(format!(
                "client_name mismatch: sent {client_name:?}, got {:?}",
                record.client_name
            )));
        }
        if record.id.is_empty() {
            return Err(CheckError::Unexpected("empty id".to_string()));
        }
        Ok(format!("created {}", record.id))
    }

    pub async fn check_list(&self) -> CheckResult {
        let records = self.list().await?;
        Ok(format!("retrieved {} records", records.len()))
    }

    pub async fn check_persistence(&self) -> CheckResult {
        let created = self.create("SmokePersistence").await?;
        let records = self.list().await?;
        if records.iter().any(|record| record.id == created.id) {
            Ok(format!("record {} persisted", created.id))
        } else {
            Err(CheckError::Unexpected(format!(
                "record {} not found in list",
                created.id
            )))
        }
    }

    pub async fn check_concurrency(&self) -> CheckResult {
        let names: Vec<String> = (0..CONCURRENT_CREATES)
            .map(|i| format!("SmokeConcurrent_{i}"))
            .collect();
        let results = join_all(names.iter().map(|name| self.create(name))).await;

        let mut ids = HashSet::new();
        for result in results {
            ids.insert(result?.id);
        }
        if ids.len() != CONCURRENT_CREATES {
            return Err(CheckError::Unexpected(format!(
                "expected {CONCURRENT_CREATES} distinct ids, got {}",
                ids.len()
            )));
        }
        Ok(format!("{CONCURRENT_CREATES} concurrent creates succeeded"))
    }
}
