//! # Services
//!
//! This module contains the storage layer of the status-check service.
//!
//! ## Available Services
//!
//! - **Store** (`store`) - Storage backends and the adapter used by handlers
//! - **Probe** (`probe`) - One-time start-up availability check

pub mod probe;
pub mod store;
