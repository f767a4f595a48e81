// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_loader::DashboardLoader;
use crate::application::dashboard_transport::DashboardTransport;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_fallback::HttpFallbackTransport;
use crate::infrastructure::rpc_service::{build_http_client, RpcService};
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;
    let backend = &config.backend;

    // Create transports (infrastructure layer)
    let client = build_http_client(backend)?;
    let primary: Arc<dyn DashboardTransport> =
        Arc::new(RpcService::new(client.clone(), backend.base_url.clone()));
    let fallback = backend.fallback_enabled.then(|| {
        Arc::new(HttpFallbackTransport::new(client, backend.base_url.clone()))
            as Arc<dyn DashboardTransport>
    });

    // Create loader (application layer)
    let loader = DashboardLoader::new(primary, fallback);

    let mut updates = loader.subscribe();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            if state.loading {
                tracing::debug!("Dashboard load in progress");
            } else if let Some(error) = &state.error {
                tracing::warn!("Dashboard showing demo data: {}", error);
            } else {
                tracing::info!("Dashboard showing backend data");
            }
        }
    });

    // Initial load, as when the dashboard is first mounted
    tokio::spawn({
        let loader = loader.clone();
        async move {
            loader.load().await;
        }
    });

    let state = Arc::new(AppState { loader });

    let addr: SocketAddr = config.server.bind_addr.parse()?;
    tracing::info!(
        "Starting cater-dashboard on {} (backend {})",
        addr,
        backend.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router(state)).await?;

    Ok(())
}
