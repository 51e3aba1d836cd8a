//! # Utility Modules
//!
//! This module contains constants used throughout the status-check service.
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Configuration defaults and limits

pub mod constant;
