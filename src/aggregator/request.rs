//! Request shape applied identically to every router in a round.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;

/// Protocol-level request options for one fan-out round.
///
/// The same method, headers, and body are sent to every router; only the
/// base URL differs per router.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method. Defaults to GET.
    pub method: Method,

    /// Headers applied to every router request.
    pub headers: HeaderMap,

    /// Optional request body.
    pub body: Option<String>,
}

impl RequestOptions {
    /// A plain GET with no headers or body.
    pub fn get() -> Self {
        Self::default()
    }

    /// A POST carrying `body` serialized as JSON.
    pub fn post_json<B: Serialize>(body: &B) -> Result<Self, serde_json::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            method: Method::POST,
            headers,
            body: Some(serde_json::to_string(body)?),
        })
    }
}
