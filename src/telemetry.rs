//! # Telemetry
//!
//! Installs the global `tracing` subscriber. Filtering follows `RUST_LOG`;
//! `LOG_FORMAT=json` switches from human-readable lines to Bunyan JSON.

use std::env;

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "status_check=info,tower_http=info";

/// Initializes tracing for the service binary.
///
/// Must be called at most once per process.
pub fn init(service_name: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let json = env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                service_name.to_string(),
                std::io::stdout,
            ))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
