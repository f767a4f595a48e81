// Backend RPC service - primary transport for dashboard data
use crate::application::dashboard_transport::{DashboardTransport, TransportError};
use crate::infrastructure::config::BackendSettings;
use crate::infrastructure::json_rpc::{
    describe_error, JsonRpcRequest, JsonRpcResponse, CALL_KW_PATH, DASHBOARD_METHOD,
    DASHBOARD_MODEL,
};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::cookie::Jar;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Shared HTTP client for both transports. Carries the session cookie, if any.
pub fn build_http_client(settings: &BackendSettings) -> anyhow::Result<reqwest::Client> {
    let jar = Jar::default();
    if let Some(session_id) = &settings.session_id {
        let url = settings
            .base_url
            .parse::<reqwest::Url>()
            .with_context(|| format!("Invalid backend base_url: {}", settings.base_url))?;
        jar.add_cookie_str(&format!("session_id={}", session_id), &url);
    }

    reqwest::Client::builder()
        .cookie_provider(Arc::new(jar))
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()
        .context("Failed to build HTTP client")
}

/// Client for the backend's model-method RPC route.
#[derive(Debug)]
pub struct RpcService {
    client: reqwest::Client,
    base_url: String,
    next_id: AtomicU64,
}

impl RpcService {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Invoke `method` on `model`. Fails on transport errors, non-success
    /// statuses and JSON-RPC `error` members.
    pub async fn call_kw(
        &self,
        model: &str,
        method: &str,
        args: Vec<Value>,
        kwargs: Map<String, Value>,
    ) -> Result<Value, TransportError> {
        let url = format!("{}{}/{}/{}", self.base_url, CALL_KW_PATH, model, method);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::call_kw(model, method, args, kwargs, id);

        tracing::debug!("RPC call {}.{} (id {})", model, method, id);
        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: JsonRpcResponse = serde_json::from_str(&body)?;

        if let Some(error) = parsed.error {
            return Err(TransportError::Backend {
                message: describe_error(&error),
            });
        }

        Ok(parsed.result.unwrap_or(Value::Null))
    }
}

#[async_trait]
impl DashboardTransport for RpcService {
    fn name(&self) -> &'static str {
        "rpc service"
    }

    async fn fetch_dashboard(&self) -> Result<Option<Value>, TransportError> {
        self.call_kw(DASHBOARD_MODEL, DASHBOARD_METHOD, Vec::new(), Map::new())
            .await
            .map(Some)
    }
}
