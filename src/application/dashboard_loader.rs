// Dashboard loader - Fetch with transport fallback, demo data as last resort
use crate::application::dashboard_transport::DashboardTransport;
use crate::domain::dashboard::DashboardData;
use crate::domain::demo::demo_dashboard;
use crate::domain::lenient::is_falsy;
use crate::domain::loader_state::LoaderState;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;

pub const DEMO_DATA_MESSAGE: &str = "Using demo data - unable to connect to backend";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load dashboard data. Using demo data.";

enum LoadOutcome {
    Loaded(DashboardData),
    Demo(&'static str),
}

/// Loads dashboard data and publishes every state change to subscribers.
///
/// Transports are tried in order: the primary RPC call, then the optional
/// fallback. The first non-empty payload is the candidate; when it lacks
/// `kpis` or nothing was fetched the demo dataset is published with an
/// error message. Overlapping loads are not serialized: the last one to
/// finish wins.
#[derive(Clone)]
pub struct DashboardLoader {
    primary: Arc<dyn DashboardTransport>,
    fallback: Option<Arc<dyn DashboardTransport>>,
    state: Arc<watch::Sender<LoaderState>>,
}

impl DashboardLoader {
    pub fn new(
        primary: Arc<dyn DashboardTransport>,
        fallback: Option<Arc<dyn DashboardTransport>>,
    ) -> Self {
        let (state, _) = watch::channel(LoaderState::initial());
        Self {
            primary,
            fallback,
            state: Arc::new(state),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<LoaderState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> LoaderState {
        self.state.borrow().clone()
    }

    /// Run one load to completion. The work happens on its own task, so
    /// dropping the returned future does not abort it.
    pub async fn load(&self) -> LoaderState {
        let loader = self.clone();
        match tokio::spawn(async move { loader.run().await }).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!("Dashboard load task failed: {}", e);
                self.state()
            }
        }
    }

    async fn run(&self) -> LoaderState {
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        // Settles the state with demo data if a transport panics mid-load
        let mut guard = LoadingGuard {
            state: &self.state,
            armed: true,
        };

        let outcome = self.resolve().await;

        let mut snapshot = LoaderState::default();
        self.state.send_modify(|state| {
            match outcome {
                LoadOutcome::Loaded(data) => state.data = Some(data),
                LoadOutcome::Demo(message) => {
                    state.error = Some(message.to_string());
                    state.data = Some(demo_dashboard());
                }
            }
            state.loading = false;
            snapshot = state.clone();
        });
        guard.armed = false;

        snapshot
    }

    async fn resolve(&self) -> LoadOutcome {
        let mut candidate = Self::attempt(self.primary.as_ref()).await;

        if candidate.is_none() {
            if let Some(fallback) = &self.fallback {
                candidate = Self::attempt(fallback.as_ref()).await;
            }
        }

        match candidate {
            Some(value) if DashboardData::is_candidate(&value) => {
                match DashboardData::from_value(value) {
                    Ok(data) => {
                        tracing::info!(
                            total_bookings = data.kpis.total_bookings,
                            total_revenue = data.kpis.total_revenue,
                            avg_satisfaction = data.kpis.avg_satisfaction,
                            active_customers = data.kpis.active_customers,
                            "Loaded dashboard data"
                        );
                        LoadOutcome::Loaded(data)
                    }
                    Err(e) => {
                        tracing::error!("Error decoding dashboard data: {}", e);
                        LoadOutcome::Demo(LOAD_FAILED_MESSAGE)
                    }
                }
            }
            _ => {
                tracing::warn!("All data loading methods failed, using demo data");
                LoadOutcome::Demo(DEMO_DATA_MESSAGE)
            }
        }
    }

    async fn attempt(transport: &dyn DashboardTransport) -> Option<Value> {
        tracing::debug!("Attempting to load dashboard data via {}", transport.name());

        // false, 0 and "" count as no payload, same as null
        let fetched = transport
            .fetch_dashboard()
            .await
            .map(|payload| payload.filter(|value| !is_falsy(value)));

        match fetched {
            Ok(None) => {
                tracing::debug!("{} returned no dashboard data", transport.name());
                None
            }
            Ok(Some(value)) => {
                tracing::debug!("Received dashboard payload via {}", transport.name());
                Some(value)
            }
            Err(e) => {
                tracing::error!("{} failed: {}", transport.name(), e);
                None
            }
        }
    }
}

struct LoadingGuard<'a> {
    state: &'a watch::Sender<LoaderState>,
    armed: bool,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.state.send_modify(|state| {
                state.error = Some(LOAD_FAILED_MESSAGE.to_string());
                state.data = Some(demo_dashboard());
                state.loading = false;
            });
        }
    }
}
