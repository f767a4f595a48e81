// Application layer - Use cases and transport seam
pub mod dashboard_loader;
pub mod dashboard_transport;
