//! Facts derived from request headers.
//!
//! Handlers pass the headers in explicitly; nothing here reads ambient
//! request state.

use axum::http::{header::HOST, HeaderMap};

const PJAX_HEADER: &str = "x-pjax";
const FORWARDED_HOST_HEADER: &str = "x-forwarded-host";

/// True when the request asks for a partial page (PJAX navigation).
pub fn is_pjax(headers: &HeaderMap) -> bool {
    headers.contains_key(PJAX_HEADER)
}

/// Host name the client used to reach us.
///
/// Priority:
/// 1. X-Forwarded-Host header (first entry, for requests through proxies)
/// 2. Host header
pub fn hostname(headers: &HeaderMap) -> Option<String> {
    if let Some(forwarded) = headers.get(FORWARDED_HOST_HEADER) {
        let host = forwarded
            .to_str()
            .ok()
            .and_then(|s| s.split(',').next())
            .map(|s| s.trim())
            .filter(|s| !s.is_empty());
        if let Some(host) = host {
            return Some(host.to_string());
        }
    }

    headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map(|s| s.to_string())
}
