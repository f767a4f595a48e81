// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_fallback;
pub mod json_rpc;
pub mod rpc_service;

#[cfg(test)]
pub mod test_server;
