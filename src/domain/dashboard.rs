// Dashboard domain model
use super::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Aggregate payload behind the catering dashboard.
///
/// Every section defaults when absent. Keys the dashboard does not render
/// (`charts`, `financial_summary`, ...) are kept in `extra` so accepted
/// backend data serializes back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default, deserialize_with = "lenient::section")]
    pub kpis: Kpis,
    #[serde(default, deserialize_with = "lenient::section")]
    pub feedback_summary: FeedbackSummary,
    #[serde(default, deserialize_with = "lenient::list")]
    pub recent_activity: Vec<ActivityItem>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub upcoming_events: Vec<UpcomingEvent>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub total_bookings: i64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub booking_growth: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub revenue_growth: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub avg_satisfaction: f64,
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub active_customers: i64,
    #[serde(
        default,
        deserialize_with = "lenient::optional_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_events: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub pending_bookings: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSummary {
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub avg_rating: f64,
    /// Percentage; the backend rounds to one decimal, the demo data uses whole numbers.
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub response_rate: f64,
    #[serde(
        default,
        deserialize_with = "lenient::optional_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_feedback: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub recommendation_rate: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ActivityItem {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            extra: Map::new(),
        }
    }
}

/// Record identifier as the backend sends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EventId {
    Int(i64),
    Text(String),
}

impl Default for EventId {
    fn default() -> Self {
        EventId::Int(0)
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventId::Int(id) => write!(f, "{}", id),
            EventId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingEvent {
    #[serde(default, deserialize_with = "lenient::event_id")]
    pub id: EventId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub customer: String,
    /// ISO date or datetime string, formatted at render time.
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub guests: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DashboardData {
    /// A candidate payload is acceptable when it is an object carrying `kpis`.
    pub fn is_candidate(value: &Value) -> bool {
        value
            .as_object()
            .and_then(|object| object.get("kpis"))
            .is_some_and(|kpis| !lenient::is_falsy(kpis))
    }

    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}
