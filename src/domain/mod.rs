// Domain layer - Dashboard data and loader state
pub mod dashboard;
pub mod demo;
pub mod lenient;
pub mod loader_state;
