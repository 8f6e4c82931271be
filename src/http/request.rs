//! Request metadata helpers.
//!
//! # Responsibilities
//! - Name the request-id header shared by the set/propagate layers
//! - Read the id back for structured log fields

use axum::http::{HeaderMap, HeaderName};

/// Header carrying the per-request correlation id.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Correlation id assigned by the request-id layer, or `"unknown"`.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}
