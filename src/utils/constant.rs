//! # Application Constants
//!
//! This module defines configuration defaults and limits used throughout the
//! status-check service.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

/// Default MongoDB connection string when `MONGO_URL` is not set
pub const DEFAULT_MONGO_URL: &str = "mongodb://localhost:27017";

/// Default database name when `DB_NAME` is not set
pub const DEFAULT_DB_NAME: &str = "test_database";

/// Default CORS origin list when `CORS_ORIGINS` is not set
pub const DEFAULT_CORS_ORIGINS: &str = "*";

/// Default listen address when `BIND_ADDR` is not set
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8000));

/// Upper bound on how long the start-up probe waits for a MongoDB server
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Name of the single collection holding status check documents
pub const COLLECTION_NAME: &str = "status_checks";

/// Maximum number of records returned by the list endpoint
pub const LIST_LIMIT: i64 = 1000;
