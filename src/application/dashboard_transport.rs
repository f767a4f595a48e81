// Transport trait for fetching dashboard payloads
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend responded with status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("backend error: {message}")]
    Backend { message: String },
}

#[async_trait]
pub trait DashboardTransport: Send + Sync {
    /// Short label used in logs
    fn name(&self) -> &'static str;

    /// Fetch a candidate dashboard payload.
    /// `Ok(None)` means the call completed but produced nothing usable.
    async fn fetch_dashboard(&self) -> Result<Option<Value>, TransportError>;
}
