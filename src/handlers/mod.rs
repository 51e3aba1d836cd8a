//! # HTTP Request Handlers
//!
//! ## Available Handlers
//!
//! - **Root** (`root`) - Greeting used as a liveness check
//! - **Status** (`status`) - Create and list status check records

mod root;
mod status;

pub use root::*;
pub use status::*;
