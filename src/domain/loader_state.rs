// Observable state of the dashboard loader
use super::dashboard::DashboardData;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoaderState {
    pub loading: bool,
    /// Set only when the demo dataset replaced backend data.
    pub error: Option<String>,
    pub data: Option<DashboardData>,
}

impl LoaderState {
    /// State of a freshly mounted dashboard, before the first load starts.
    pub fn initial() -> Self {
        Self {
            loading: true,
            error: None,
            data: None,
        }
    }
}
