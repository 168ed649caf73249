pub mod reqwest_http;

use async_trait::async_trait;

use crate::errors::ClientError;

/// Status and raw body of a backend response. The body is decoded by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait HttpPort: Send + Sync {
    /// `path` includes any query string, e.g. `/api/bookings?phone=%2B1555`.
    async fn get(&self, path: &str) -> Result<HttpResponse, ClientError>;

    /// Sends `body` with `content-type: application/json`.
    async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<HttpResponse, ClientError>;
}
