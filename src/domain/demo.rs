// Fixed demonstration dataset shown when no backend data could be obtained
use super::dashboard::{
    ActivityItem, DashboardData, EventId, FeedbackSummary, Kpis, UpcomingEvent,
};
use serde_json::Map;

pub fn demo_dashboard() -> DashboardData {
    DashboardData {
        kpis: Kpis {
            total_bookings: 25,
            booking_growth: 15.5,
            total_revenue: 12500.0,
            revenue_growth: 8.2,
            avg_satisfaction: 4.3,
            active_customers: 18,
            completed_events: None,
            pending_bookings: None,
        },
        feedback_summary: FeedbackSummary {
            avg_rating: 4.3,
            response_rate: 75.0,
            total_feedback: None,
            recommendation_rate: None,
            extra: Map::new(),
        },
        recent_activity: vec![
            ActivityItem::new("New Booking Created", "Wedding event scheduled for next month"),
            ActivityItem::new("Feedback Received", "5-star rating for birthday party catering"),
            ActivityItem::new("Payment Received", "GHS 2,500 payment confirmed"),
        ],
        upcoming_events: vec![
            demo_event(1, "Corporate Lunch", "ABC Corp", "2025-09-20", 50, "Confirmed"),
            demo_event(2, "Wedding Reception", "John & Mary", "2025-09-25", 150, "In Progress"),
        ],
        extra: Map::new(),
    }
}

fn demo_event(
    id: i64,
    name: &str,
    customer: &str,
    date: &str,
    guests: i64,
    status: &str,
) -> UpcomingEvent {
    UpcomingEvent {
        id: EventId::Int(id),
        name: name.to_string(),
        customer: customer.to_string(),
        date: date.to_string(),
        guests,
        status: status.to_string(),
        extra: Map::new(),
    }
}
