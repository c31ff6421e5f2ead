//! Response hardening headers.
//!
//! Upstream status data changes from second to second and the privileged
//! endpoints carry authenticated results, so nothing here may be cached by
//! intermediaries.

use axum::http::{header, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

/// Layer forcing `Cache-Control: no-store` on every response.
pub fn no_store_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))
}
