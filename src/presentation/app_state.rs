// Application state for HTTP handlers
use crate::application::dashboard_loader::DashboardLoader;

#[derive(Clone)]
pub struct AppState {
    pub loader: DashboardLoader,
}
