// Throwaway backend for transport tests: records requests, answers with a canned body
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    Json, Router,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub content_type: Option<String>,
    pub cookie: Option<String>,
    pub body: Value,
}

#[derive(Debug, Clone, Default)]
pub struct Recorded(Arc<Mutex<Vec<RecordedRequest>>>);

impl Recorded {
    pub fn all(&self) -> Vec<RecordedRequest> {
        self.0.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<RecordedRequest> {
        self.0.lock().unwrap().last().cloned()
    }
}

struct CannedBackend {
    status: StatusCode,
    body: Value,
    recorded: Recorded,
}

/// Bind an ephemeral local port and serve `body` with `status` for every request.
pub async fn spawn_backend(status: StatusCode, body: Value) -> (String, Recorded) {
    let recorded = Recorded::default();
    let backend = Arc::new(CannedBackend {
        status,
        body,
        recorded: recorded.clone(),
    });

    let router = Router::new().fallback(answer).with_state(backend);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}", addr), recorded)
}

async fn answer(
    State(backend): State<Arc<CannedBackend>>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    backend.recorded.0.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        content_type: header_text(header::CONTENT_TYPE),
        cookie: header_text(header::COOKIE),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    (backend.status, Json(backend.body.clone()))
}
