// Raw HTTP fallback - hand-built JSON-RPC POST to the generic call_kw route
use crate::application::dashboard_transport::{DashboardTransport, TransportError};
use crate::domain::lenient::is_falsy;
use crate::infrastructure::json_rpc::{
    describe_error, JsonRpcRequest, JsonRpcResponse, CALL_KW_PATH, DASHBOARD_METHOD,
    DASHBOARD_MODEL,
};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde_json::{Map, Value};

const MAX_REQUEST_ID: u64 = 1_000_000;

#[derive(Debug, Clone)]
pub struct HttpFallbackTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFallbackTransport {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl DashboardTransport for HttpFallbackTransport {
    fn name(&self) -> &'static str {
        "http fallback"
    }

    async fn fetch_dashboard(&self) -> Result<Option<Value>, TransportError> {
        let url = format!("{}{}", self.base_url, CALL_KW_PATH);
        let request = JsonRpcRequest::call_kw(
            DASHBOARD_MODEL,
            DASHBOARD_METHOD,
            Vec::new(),
            Map::new(),
            rand::random_range(0..MAX_REQUEST_ID),
        );

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(serde_json::to_vec(&request)?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: JsonRpcResponse = serde_json::from_str(&body)?;

        match (parsed.result, parsed.error) {
            (Some(result), _) if !is_falsy(&result) => Ok(Some(result)),
            (_, Some(error)) => {
                tracing::error!("Backend error: {}", describe_error(&error));
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}
