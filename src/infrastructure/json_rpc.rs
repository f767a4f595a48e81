// JSON-RPC 2.0 envelope used by the backend's `call_kw` endpoint
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const CALL_KW_PATH: &str = "/web/dataset/call_kw";
pub const DASHBOARD_MODEL: &str = "cater.dashboard";
pub const DASHBOARD_METHOD: &str = "get_dashboard_data";

#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: CallKwParams<'a>,
    pub id: u64,
}

#[derive(Debug, Serialize)]
pub struct CallKwParams<'a> {
    pub model: &'a str,
    pub method: &'a str,
    pub args: Vec<Value>,
    pub kwargs: Map<String, Value>,
}

impl<'a> JsonRpcRequest<'a> {
    pub fn call_kw(
        model: &'a str,
        method: &'a str,
        args: Vec<Value>,
        kwargs: Map<String, Value>,
        id: u64,
    ) -> Self {
        Self {
            jsonrpc: "2.0",
            method: "call",
            params: CallKwParams {
                model,
                method,
                args,
                kwargs,
            },
            id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

/// Best human-readable message from a JSON-RPC error member.
/// The backend nests the exception text under `data.message`.
pub fn describe_error(error: &Value) -> String {
    let nested = error
        .get("data")
        .and_then(|data| data.get("message"))
        .and_then(Value::as_str);
    let top = error.get("message").and_then(Value::as_str);

    match (nested, top, error.as_str()) {
        (Some(message), _, _) | (None, Some(message), _) | (None, None, Some(message)) => {
            message.to_string()
        }
        _ => error.to_string(),
    }
}
