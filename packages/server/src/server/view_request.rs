use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};

use crate::helpers::{hostname, is_pjax};

/// Per-request view context, resolved once from the headers.
///
/// Handlers take this as an extractor and hand the plain values to
/// templates instead of letting templates read the request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewRequest {
    /// Partial-page (PJAX) navigation: render the content without the layout.
    pub pjax: bool,
    pub hostname: Option<String>,
}

impl ViewRequest {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            pjax: is_pjax(headers),
            hostname: hostname(headers),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ViewRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let view = ViewRequest::from_headers(&parts.headers);
        tracing::debug!(pjax = view.pjax, hostname = ?view.hostname, "Resolved view request");
        Ok(view)
    }
}
