// Presentation layer - HTTP surface over the view-model services
pub mod app_state;
pub mod handlers;
pub mod routes;
