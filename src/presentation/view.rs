// Render-ready view of the dashboard, built from the loader state
use crate::domain::dashboard::{DashboardData, Kpis};
use crate::domain::loader_state::LoaderState;
use crate::presentation::formatters::{
    format_currency, format_date, format_growth, growth_tone, star_rating,
};
use serde::Serialize;

pub const NO_ACTIVITY_MESSAGE: &str = "No recent activity";
pub const NO_EVENTS_MESSAGE: &str = "No upcoming events";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub loading: bool,
    /// Warning shown above the content when demo data is displayed
    pub banner: Option<String>,
    /// Present once data exists and no load is in flight
    pub content: Option<DashboardContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardContent {
    pub kpi_cards: Vec<KpiCard>,
    pub feedback: FeedbackPanel,
    pub activity: ActivityPanel,
    pub events: EventsTable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: String,
    pub growth: Option<String>,
    pub tone: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackPanel {
    pub average_rating: String,
    pub stars: String,
    pub response_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityPanel {
    pub items: Vec<ActivityLine>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityLine {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventsTable {
    pub rows: Vec<EventRow>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRow {
    pub id: String,
    pub name: String,
    pub customer: String,
    pub date: String,
    pub guests: i64,
    pub status: String,
}

impl DashboardView {
    pub fn from_state(state: &LoaderState) -> Self {
        let content = match (&state.data, state.loading) {
            (Some(data), false) => Some(DashboardContent::from_data(data)),
            _ => None,
        };

        Self {
            loading: state.loading,
            banner: state.error.clone(),
            content,
        }
    }
}

impl DashboardContent {
    pub fn from_data(data: &DashboardData) -> Self {
        let activity: Vec<ActivityLine> = data
            .recent_activity
            .iter()
            .map(|item| ActivityLine {
                title: item.title.clone(),
                description: item.description.clone(),
            })
            .collect();

        let rows: Vec<EventRow> = data
            .upcoming_events
            .iter()
            .map(|event| EventRow {
                id: event.id.to_string(),
                name: event.name.clone(),
                customer: event.customer.clone(),
                date: format_date(&event.date),
                guests: event.guests,
                status: event.status.clone(),
            })
            .collect();

        let feedback = &data.feedback_summary;

        Self {
            kpi_cards: kpi_cards(&data.kpis),
            feedback: FeedbackPanel {
                average_rating: format!("{}/5", feedback.avg_rating),
                stars: star_rating(feedback.avg_rating),
                response_rate: format!("{}%", feedback.response_rate),
            },
            activity: ActivityPanel {
                empty_message: activity.is_empty().then_some(NO_ACTIVITY_MESSAGE),
                items: activity,
            },
            events: EventsTable {
                empty_message: rows.is_empty().then_some(NO_EVENTS_MESSAGE),
                rows,
            },
        }
    }
}

fn kpi_cards(kpis: &Kpis) -> Vec<KpiCard> {
    vec![
        KpiCard {
            label: "Total Bookings (This Month)",
            value: kpis.total_bookings.to_string(),
            growth: Some(format_growth(kpis.booking_growth)),
            tone: Some(growth_tone(kpis.booking_growth)),
        },
        KpiCard {
            label: "Monthly Revenue",
            value: format_currency(kpis.total_revenue),
            growth: Some(format_growth(kpis.revenue_growth)),
            tone: Some(growth_tone(kpis.revenue_growth)),
        },
        KpiCard {
            label: "Customer Satisfaction",
            value: format!("{:.1}/5.0", kpis.avg_satisfaction),
            growth: None,
            tone: None,
        },
        KpiCard {
            label: "Active Customers",
            value: kpis.active_customers.to_string(),
            growth: None,
            tone: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::demo::demo_dashboard;

    fn demo_state() -> LoaderState {
        LoaderState {
            loading: false,
            error: Some("Using demo data - unable to connect to backend".to_string()),
            data: Some(demo_dashboard()),
        }
    }

    #[test]
    fn test_demo_data_renders_formatted_kpis() {
        let demo = demo_dashboard();
        let view = DashboardView::from_state(&demo_state());

        assert!(view.banner.is_some());
        let content = view.content.unwrap();
        let values: Vec<String> = content.kpi_cards.iter().map(|c| c.value.clone()).collect();
        assert_eq!(
            values,
            vec![
                demo.kpis.total_bookings.to_string(),
                format_currency(demo.kpis.total_revenue),
                "4.3/5.0".to_string(),
                demo.kpis.active_customers.to_string(),
            ]
        );
        assert_eq!(content.kpi_cards[0].growth.as_deref(), Some("↗ 15.5%"));
        assert_eq!(content.kpi_cards[1].value, "GH₵12,500.00");
        assert_eq!(content.kpi_cards[1].tone, Some("success"));
    }

    #[test]
    fn test_demo_data_renders_panels() {
        let demo = demo_dashboard();
        let content = DashboardView::from_state(&demo_state()).content.unwrap();

        assert_eq!(content.events.rows.len(), demo.upcoming_events.len());
        assert_eq!(content.events.rows.len(), 2);
        assert_eq!(content.events.rows[0].date, "Sep 20, 12:00 AM");
        assert_eq!(content.events.rows[1].customer, "John & Mary");
        assert_eq!(content.events.empty_message, None);

        assert_eq!(content.activity.items.len(), 3);
        assert_eq!(content.activity.items[2].description, "GHS 2,500 payment confirmed");

        assert_eq!(content.feedback.average_rating, "4.3/5");
        assert_eq!(content.feedback.stars, "★★★★☆");
        assert_eq!(content.feedback.response_rate, "75%");
    }

    #[test]
    fn test_empty_sections_show_messages() {
        let state = LoaderState {
            loading: false,
            error: None,
            data: Some(DashboardData::default()),
        };

        let view = DashboardView::from_state(&state);
        assert_eq!(view.banner, None);
        let content = view.content.unwrap();
        assert_eq!(content.activity.empty_message, Some(NO_ACTIVITY_MESSAGE));
        assert_eq!(content.events.empty_message, Some(NO_EVENTS_MESSAGE));
        assert_eq!(content.kpi_cards[1].value, "GH₵0.00");
        assert_eq!(content.feedback.response_rate, "0%");
    }

    #[test]
    fn test_content_hidden_while_loading() {
        let mut state = demo_state();
        state.loading = true;

        let view = DashboardView::from_state(&state);
        assert!(view.loading);
        assert!(view.content.is_none());

        assert!(DashboardView::from_state(&LoaderState::initial()).content.is_none());
    }

    #[test]
    fn test_negative_growth_tone() {
        let mut data = demo_dashboard();
        data.kpis.revenue_growth = -8.2;

        let content = DashboardContent::from_data(&data);
        assert_eq!(content.kpi_cards[1].growth.as_deref(), Some("↘ 8.2%"));
        assert_eq!(content.kpi_cards[1].tone, Some("danger"));
    }
}
