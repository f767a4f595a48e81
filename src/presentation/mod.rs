// Presentation layer - Formatting, view model and HTTP host
pub mod app_state;
pub mod formatters;
pub mod handlers;
pub mod view;
