//! # CORS Policy
//!
//! Builds the CORS layer from the configured origin list. Credentials are
//! always allowed, which rules out literal `*` responses, so a `*` entry is
//! served by echoing the request's `Origin` back.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{debug, warn};

/// Creates the CORS layer for `origins`.
///
/// - Any `*` entry allows every origin.
/// - Otherwise only the listed origins are allowed. Entries that are not
///   valid header values are skipped with a warning.
///
/// All methods and request headers are allowed.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|origin| origin == "*") {
        debug!("CORS allows any origin");
        AllowOrigin::mirror_request()
    } else {
        let allowed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(origin = %origin, error = %e, "Skipping invalid CORS origin");
                    None
                }
            })
            .collect();
        debug!(?allowed, "CORS allows listed origins");
        AllowOrigin::list(allowed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
