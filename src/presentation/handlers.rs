// HTTP request handlers
use crate::domain::loader_state::LoaderState;
use crate::presentation::app_state::AppState;
use crate::presentation::view::DashboardView;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(current_dashboard))
        .route("/dashboard/state", get(loader_state))
        .route("/dashboard/refresh", post(refresh_dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current dashboard as the view layer would render it
pub async fn current_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    Json(DashboardView::from_state(&state.loader.state()))
}

pub async fn loader_state(State(state): State<Arc<AppState>>) -> Json<LoaderState> {
    Json(state.loader.state())
}

/// Reload from the backend and return the resulting view. The load runs on its own task, so a client that
/// disconnects mid-request does not leave the dashboard half-loaded.
pub async fn refresh_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    let settled = state.loader.load().await;
    Json(DashboardView::from_state(&settled))
}
