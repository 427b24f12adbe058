//! Envelope response format for all API responses.
//!
//! Every successful response is wrapped in a consistent envelope:
//! ```json
//! {
//!   "data": { ... },
//!   "meta": { "request_id": "...", "timestamp": "...", "response_time_ms": 5 },
//!   "_links": { "self": "..." }
//! }
//! ```
//! Failures use the same shape with `data: null` and an `errors` list (see
//! [`crate::http::error::AppError`]).

use std::collections::HashMap;
use std::time::Instant;

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Envelope response wrapping all API data.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,

    pub meta: ApiMeta,

    /// HATEOAS-style links for discoverability.
    #[serde(rename = "_links", skip_serializing_if = "HashMap::is_empty")]
    pub links: HashMap<String, String>,
}

/// Metadata included in every response.
#[derive(Debug, Serialize)]
pub struct ApiMeta {
    /// Unique request identifier for tracing.
    pub request_id: String,
    /// ISO-8601 timestamp of the response.
    pub timestamp: String,
    /// Response time in milliseconds.
    pub response_time_ms: u64,
}

/// Started at the top of a handler; stamps the envelope when the data is ready.
pub struct RequestTimer {
    start: Instant,
    request_id: String,
}

impl RequestTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
            request_id: uuid::Uuid::now_v7().to_string(),
        }
    }

    /// Wrap `data` in a success envelope.
    pub fn finish<T: Serialize>(self, data: T) -> ApiResponse<T> {
        ApiResponse {
            data,
            meta: ApiMeta {
                request_id: self.request_id,
                timestamp: chrono::Utc::now().to_rfc3339(),
                response_time_ms: self.start.elapsed().as_millis() as u64,
            },
            links: HashMap::new(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Add a HATEOAS link.
    pub fn with_link(mut self, rel: &str, href: impl Into<String>) -> Self {
        self.links.insert(rel.to_string(), href.into());
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
